// src/analyzer.rs

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Produces a line-count report for a directory.
pub trait Analyzer {
    fn analyze(&self, dir: &Path) -> Result<String>;
}

impl<T: Analyzer + ?Sized> Analyzer for &T {
    fn analyze(&self, dir: &Path) -> Result<String> {
        (**self).analyze(dir)
    }
}

/// Runs an external counter (normally `cloc`) with the directory as its only
/// argument and captures standard output. Blocks until the process exits.
#[derive(Debug, Clone)]
pub struct Cloc {
    program: OsString,
}

impl Cloc {
    pub fn new(program: impl Into<OsString>) -> Self {
        Cloc { program: program.into() }
    }

    fn name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Analyzer for Cloc {
    fn analyze(&self, dir: &Path) -> Result<String> {
        debug!(program = %self.name(), dir = %dir.display(), "running analyzer");

        let output = Command::new(&self.program)
            .arg(dir)
            .output()
            .map_err(|source| Error::AnalyzerSpawn {
                program: self.name(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::AnalyzerFailed {
                program: self.name(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
