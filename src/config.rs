// src/config.rs

use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_ANALYZER: &str = "cloc";

/// Settings for one run, passed explicitly into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Working directory of the repository whose tags are measured
    pub target_dir: PathBuf,
    /// Program invoked once per tag with the working directory as argument
    pub analyzer: OsString,
}

impl Config {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Config {
            target_dir: target_dir.into(),
            analyzer: OsString::from(DEFAULT_ANALYZER),
        }
    }
}
