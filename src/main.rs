// src/main.rs

mod analyzer;
mod cli;
mod collector;
mod config;
mod error;
mod git;
mod model;
mod renderer;
mod report;
mod version;

use analyzer::Cloc;
use clap::Parser;
use cli::Args;
use collector::Collector;
use config::Config;
use git::{GitRepo, Vcs};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Measures every tag and writes the chart page; nothing is rendered if any
/// tag fails.
fn run(config: &Config) -> error::Result<PathBuf> {
    let repo = GitRepo::open(&config.target_dir)?;

    let mut tags = repo.list_tags()?;
    version::sort_tags(&mut tags);
    info!(count = tags.len(), "found tags");

    let collector = Collector::new(repo, Cloc::new(config.analyzer.clone()));
    let records = collector.collect(&tags)?;

    renderer::write_report(&records)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cloc_evolution=info")))
        .init();

    let config = Args::parse().into_config();
    let start_time = Instant::now();

    let report = match run(&config) {
        Ok(path) => path,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    println!("Report written to {} in {:.2?}.", report.display(), start_time.elapsed());

    if let Err(e) = renderer::open_in_viewer(&report) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
