// src/model.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Code-line count per language, keyed by the analyzer's label
pub type LanguageCounts = HashMap<String, u64>;

/// The useful part of one analyzer report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedReport {
    pub languages: LanguageCounts,
    /// The analyzer's own grand total. It need not equal the sum of `languages`.
    pub total: u64,
}

/// A tree that has been checked out into the working directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    pub id: git2::Oid,
    pub time: DateTime<Utc>,
}

/// One measurement per tag, in version order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub version: String,
    /// Commit time of the tagged revision
    pub date: DateTime<Utc>,
    pub language_counts: LanguageCounts,
    pub total_lines: u64,
}

impl VersionRecord {
    pub fn new(tag: &str, revision: &Revision, report: ParsedReport) -> Self {
        VersionRecord {
            version: tag.to_string(),
            date: revision.time,
            language_counts: report.languages,
            total_lines: report.total,
        }
    }
}
