// src/collector.rs

use crate::analyzer::Analyzer;
use crate::error::Result;
use crate::git::Vcs;
use crate::model::VersionRecord;
use crate::report::parse_report;
use indicatif::ProgressBar;
use std::io::{self, Write};
use tracing::info;

/// Walks tags one at a time: checkout, analyze, parse, append.
///
/// There is a single working directory, so tags are strictly sequential.
/// The first failure at any stage ends the run and the records gathered so
/// far are dropped.
pub struct Collector<V, A> {
    vcs: V,
    analyzer: A,
}

impl<V: Vcs, A: Analyzer> Collector<V, A> {
    pub fn new(vcs: V, analyzer: A) -> Self {
        Collector { vcs, analyzer }
    }

    /// `tags` must already be in version order; records come back in the
    /// same order, one per tag. Progress lines go to stdout.
    pub fn collect(&self, tags: &[String]) -> Result<Vec<VersionRecord>> {
        self.collect_to(tags, &mut io::stdout())
    }

    /// Like [`Collector::collect`], writing progress lines to `out`. The bar
    /// is suspended around each write so a terminal display is not torn.
    pub fn collect_to<W: Write>(&self, tags: &[String], out: &mut W) -> Result<Vec<VersionRecord>> {
        let workdir = self.vcs.workdir();
        let bar = ProgressBar::new(tags.len() as u64);
        bar.set_message("Measuring tags");

        let mut records = Vec::with_capacity(tags.len());
        for tag in tags {
            bar.suspend(|| writeln!(out, "Checking out tag {} in {}", tag, workdir.display()))?;
            let revision = self.vcs.checkout(tag)?;

            bar.suspend(|| writeln!(out, "Running cloc on {}", workdir.display()))?;
            let output = self.analyzer.analyze(workdir)?;
            let report = parse_report(&output)?;

            let mut languages: Vec<_> = report.languages.iter().collect();
            languages.sort();
            bar.suspend(|| {
                info!(tag = %tag, commit = %revision.id, total = report.total, "measured");
                writeln!(out, "Languages: {:?}\nTotal LOC: {}\n", languages, report.total)
            })?;

            records.push(VersionRecord::new(tag, &revision, report));
            bar.inc(1);
        }
        bar.finish_with_message("Collection complete");

        Ok(records)
    }
}
