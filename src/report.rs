//! Presentation layer over the analyzer's numeric results

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::analyzer::LogAnalyzer;
use crate::error::Result;
use crate::source::RecordSource;

/// Serializable summary of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessReport {
    pub total_accesses: u64,
    pub hour_counts: Vec<u64>,
    pub day_counts: Vec<u64>,
    pub weekday_counts: Vec<u64>,
    pub month_counts: Vec<u64>,
    pub year_counts: Vec<u64>,
    pub busiest_hour: usize,
    pub busiest_hours: Vec<usize>,
    pub quietest_hour: usize,
    pub busiest_two_hour_start: usize,
    pub busiest_day: u32,
    pub quietest_day: u32,
    pub busiest_month: u32,
    pub quietest_month: u32,
}

impl AccessReport {
    /// Snapshot the analyzer's tables and query results.
    pub fn from_analyzer<S: RecordSource>(analyzer: &LogAnalyzer<S>) -> Self {
        Self {
            total_accesses: analyzer.total_accesses(),
            hour_counts: analyzer.hour_counts().to_vec(),
            day_counts: analyzer.day_counts().to_vec(),
            weekday_counts: analyzer.weekday_counts().to_vec(),
            month_counts: analyzer.month_counts().to_vec(),
            year_counts: analyzer.year_counts().to_vec(),
            busiest_hour: analyzer.busiest_hour(),
            busiest_hours: analyzer.busiest_hours(),
            quietest_hour: analyzer.quietest_hour(),
            busiest_two_hour_start: analyzer.busiest_two_hour_window(),
            busiest_day: analyzer.busiest_day(),
            quietest_day: analyzer.quietest_day(),
            busiest_month: analyzer.busiest_month(),
            quietest_month: analyzer.quietest_month(),
        }
    }

    /// Render the human-readable report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Hr: Count");
        for (hour, count) in self.hour_counts.iter().enumerate() {
            let _ = writeln!(out, "{hour}: {count}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total accesses: {}", self.total_accesses);

        if self.busiest_hours.len() > 1 {
            let hours: Vec<String> = self.busiest_hours.iter().map(|h| h.to_string()).collect();
            let _ = writeln!(out, "Busiest hours: {}", hours.join(", "));
        } else {
            let _ = writeln!(out, "Busiest hour: {}", self.busiest_hour);
        }
        let _ = writeln!(out, "Quietest hour: {}", self.quietest_hour);
        let _ = writeln!(
            out,
            "Busiest two-hour window: {}:00-{}:59",
            self.busiest_two_hour_start,
            self.busiest_two_hour_start + 1
        );
        let _ = writeln!(out, "Busiest day: {}", self.busiest_day);
        let _ = writeln!(out, "Quietest day: {}", self.quietest_day);
        let _ = writeln!(out, "Busiest month: {}", self.busiest_month);
        let _ = writeln!(out, "Quietest month: {}", self.quietest_month);

        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
