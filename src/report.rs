// src/report.rs

//! Reads the plain-text summary table printed by `cloc`.
//!
//! ```text
//! Language                      files          blank        comment           code
//! --------------------------------------------------------------------------------
//! Java                           1269          34118          13669         141385
//! SUM:                           4836         163326          63095         605448
//! ```
//!
//! Only the code column is kept. Scanning stops at the first `SUM:` row.

use crate::error::ReportError;
use crate::model::{LanguageCounts, ParsedReport};
use regex::Regex;
use std::sync::OnceLock;

/// Label of the grand-total row.
pub const TERMINATOR: &str = "SUM:";

/// A label (word groups separated by single spaces) followed by exactly the
/// files, blank, comment and code columns. A label may itself end in a
/// number, as in `Fortran 77`.
fn row_pattern() -> &'static Regex {
    static ROW: OnceLock<Regex> = OnceLock::new();
    ROW.get_or_init(|| {
        Regex::new(r"^(?P<label>[\w#+/.:'()\-]+(?: [\w#+/.:'()\-]+)*?)\s+\d+\s+\d+\s+\d+\s+(?P<code>\d+)\s*$")
            .expect("row pattern is valid")
    })
}

pub fn parse_report(text: &str) -> Result<ParsedReport, ReportError> {
    let mut languages = LanguageCounts::new();

    for (index, line) in text.lines().enumerate() {
        let Some(caps) = row_pattern().captures(line) else {
            continue;
        };
        let label = caps["label"].trim();
        let raw = &caps["code"];
        let code = raw.parse::<u64>().map_err(|_| ReportError::InvalidCount {
            line: index + 1,
            value: raw.to_string(),
        })?;

        if label == TERMINATOR {
            return Ok(ParsedReport { languages, total: code });
        }
        languages.insert(label.to_string(), code);
    }

    Err(ReportError::MissingTotal)
}
