// src/error.rs

use std::path::PathBuf;
use std::process::ExitStatus;

/// Everything that can stop a run. None of these are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Opening the repository, listing tags or checking one out failed.
    #[error("repository error: {0}")]
    Repository(#[from] git2::Error),

    /// A tag whose name git cannot hand back as UTF-8.
    #[error("tag name is not valid UTF-8: {0}")]
    TagName(String),

    /// The analyzer could not be started or its output could not be read.
    #[error("failed to run analyzer `{program}`: {source}")]
    AnalyzerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The analyzer ran but exited unsuccessfully.
    #[error("analyzer `{program}` exited with {status}: {stderr}")]
    AnalyzerFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// Writing a progress line failed.
    #[error("failed to write progress output: {0}")]
    Progress(#[from] std::io::Error),

    #[error("unrecognized analyzer report: {0}")]
    Report(#[from] ReportError),

    #[error("failed to serialize report data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Creating or writing the report file failed.
    #[error("failed to write report in {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {} in a viewer: {source}", .path.display())]
    Viewer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Format errors raised while reading an analyzer report.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("no SUM: row found, perhaps this is an untested cloc version?")]
    MissingTotal,

    #[error("line {line}: `{value}` is not a valid line count")]
    InvalidCount { line: usize, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
