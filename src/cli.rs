// src/cli.rs

use crate::config::Config;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Chart lines of code per language across every tag of a git repository
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The location of the git repository [default: the directory of this program]
    #[arg(short, long)]
    pub targetdir: Option<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> Config {
        let target_dir = self.targetdir.unwrap_or_else(|| {
            let argv0 = std::env::args_os().next().unwrap_or_default();
            program_dir(&argv0)
        });
        Config::new(target_dir)
    }
}

/// Directory part of the program path; `.` when there is none.
pub fn program_dir(argv0: &OsStr) -> PathBuf {
    match Path::new(argv0).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
