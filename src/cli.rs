//! Command implementations behind the binary's argument parsing

use std::path::Path;
use tracing::debug;

use crate::analyzer::LogAnalyzer;
use crate::error::Result;
use crate::generator::LogfileCreator;
use crate::report::AccessReport;
use crate::source::LogfileReader;

/// Analyze a log file and render the report as text or JSON.
pub fn run_analyze(path: &Path, json: bool) -> Result<String> {
    debug!("Analyzing {}", path.display());

    let mut analyzer = LogAnalyzer::new(LogfileReader::new(path));
    analyzer.ingest_all()?;

    let report = AccessReport::from_analyzer(&analyzer);
    if json {
        report.to_json()
    } else {
        Ok(report.to_text())
    }
}

/// Generate a synthetic log file with `entries` random records.
pub fn run_generate(path: &Path, entries: usize) -> Result<()> {
    debug!("Generating {entries} entries into {}", path.display());
    LogfileCreator::new().create_file(path, entries)
}
