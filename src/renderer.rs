// src/renderer.rs

use crate::error::{Error, Result};
use crate::model::VersionRecord;
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Lines of Code across source code versions</title>
    <script src="https://code.highcharts.com/highcharts.js"></script>
    <script src="https://code.highcharts.com/modules/exporting.js"></script>
    <style>
        body { font-family: sans-serif; margin: 2em; }
        table { border-collapse: collapse; margin-top: 2em; }
        th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: right; }
        th:first-child, td:first-child { text-align: left; }
        .timestamp { color: #888; }
    </style>
</head>
<body>
    <div id="graph"></div>
    <table id="totals">
        <thead><tr><th>Version</th><th>Date</th><th>Total LOC</th></tr></thead>
        <tbody></tbody>
    </table>
    <p class="timestamp">Generated __GENERATED__</p>
    <script type="text/javascript">
        const versionLOCs = __DATA__;

        // Languages come and go between versions; gaps stay empty.
        const languages = [...new Set(versionLOCs.flatMap(v => Object.keys(v.languageCounts)))].sort();

        Highcharts.chart('graph', {
            chart: { type: 'spline' },
            title: { text: 'Lines of Code across source code versions' },
            xAxis: { categories: versionLOCs.map(v => v.version) },
            yAxis: { title: { text: 'Number of lines of code' } },
            plotOptions: {
                line: { dataLabels: { enabled: true }, enableMouseTracking: true }
            },
            series: languages.map(language => ({
                name: language,
                data: versionLOCs.map(v => v.languageCounts[language] ?? null)
            }))
        });

        const body = document.querySelector('#totals tbody');
        for (const v of versionLOCs) {
            const row = body.insertRow();
            row.insertCell().textContent = v.version;
            row.insertCell().textContent = v.date.slice(0, 10);
            row.insertCell().textContent = v.totalLines.toLocaleString();
        }
    </script>
</body>
</html>
"#;

/// Builds the standalone chart page with `records` embedded as JSON.
pub fn render_html(records: &[VersionRecord], generated: DateTime<Local>) -> Result<String> {
    let data = serde_json::to_string(records)?;
    // Keep tag names like `</script>` from ending the script element
    let data = data.replace("</", "<\\/");

    Ok(TEMPLATE
        .replace("__GENERATED__", &generated.format("%Y-%m-%d %H:%M:%S").to_string())
        .replace("__DATA__", &data))
}

/// Writes the page to a fresh `cloc-evolution*.html` file in `dir` and keeps
/// it. On failure the partial file is removed.
pub fn write_report_in(dir: &Path, records: &[VersionRecord]) -> Result<PathBuf> {
    let html = render_html(records, Local::now())?;
    let render_err = |source| Error::Render { path: dir.to_path_buf(), source };

    let mut file = tempfile::Builder::new()
        .prefix("cloc-evolution")
        .suffix(".html")
        .tempfile_in(dir)
        .map_err(render_err)?;
    file.write_all(html.as_bytes()).map_err(render_err)?;
    file.flush().map_err(render_err)?;

    let (_, path) = file.keep().map_err(|e| render_err(e.error))?;
    info!(path = %path.display(), records = records.len(), "wrote report");
    Ok(path)
}

pub fn write_report(records: &[VersionRecord]) -> Result<PathBuf> {
    write_report_in(&std::env::temp_dir(), records)
}

/// Hands the file to the desktop's default handler without waiting for it.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    debug!(?command, "opening report");
    command.spawn().map_err(|source| Error::Viewer {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParsedReport, Revision};
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn record(tag: &str, langs: &[(&str, u64)], total: u64) -> VersionRecord {
        let revision = Revision {
            id: git2::Oid::zero(),
            time: Utc.timestamp_opt(1_650_000_000, 0).unwrap(),
        };
        let report = ParsedReport {
            languages: langs.iter().map(|(l, n)| (l.to_string(), *n)).collect::<HashMap<_, _>>(),
            total,
        };
        VersionRecord::new(tag, &revision, report)
    }

    fn embedded_data(html: &str) -> serde_json::Value {
        let start = html.find("const versionLOCs = ").unwrap() + "const versionLOCs = ".len();
        let end = start + html[start..].find(";\n").unwrap();
        serde_json::from_str(&html[start..end].replace("<\\/", "</")).unwrap()
    }

    #[test]
    fn embeds_records_in_order() {
        let records = vec![
            record("v1.0", &[("Rust", 10)], 12),
            record("v2.0", &[("Rust", 20), ("Shell", 3)], 25),
        ];
        let html = render_html(&records, Local::now()).unwrap();
        let data = embedded_data(&html);

        assert_eq!(data[0]["version"], "v1.0");
        assert_eq!(data[1]["version"], "v2.0");
        assert_eq!(data[1]["languageCounts"]["Shell"], 3);
        assert_eq!(data[1]["totalLines"], 25);
        assert!(!html.contains("__DATA__"));
        assert!(!html.contains("__GENERATED__"));
    }

    #[test]
    fn script_closing_tags_are_escaped() {
        let records = vec![record("</script><b>x", &[], 0)];
        let html = render_html(&records, Local::now()).unwrap();
        assert_eq!(html.matches("</script>").count(), 3);
        assert_eq!(embedded_data(&html)[0]["version"], "</script><b>x");
    }

    #[test]
    fn empty_history_still_renders() {
        let html = render_html(&[], Local::now()).unwrap();
        assert!(html.contains("const versionLOCs = [];"));
    }

    #[test]
    fn writes_and_keeps_html_file() {
        let dir = TempDir::new().unwrap();
        let path = write_report_in(dir.path(), &[record("v1", &[("C", 1)], 1)]).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("cloc-evolution"));
        assert!(name.ends_with(".html"));
        assert!(fs::read_to_string(&path).unwrap().contains("\"version\":\"v1\""));
    }

    #[test]
    fn missing_directory_is_a_render_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = write_report_in(&missing, &[]).unwrap_err();
        assert!(matches!(err, Error::Render { ref path, .. } if *path == missing));
    }
}
