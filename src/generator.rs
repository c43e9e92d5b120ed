//! Synthetic log file generation for testing and demos

use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::analyzer::{BASE_YEAR, DAYS_PER_MONTH, HOURS_PER_DAY, MONTHS_PER_YEAR, YEAR_SPAN};
use crate::error::{Error, Result};
use crate::record::LogEntry;

/// Status codes drawn per entry: 95% 200, 3% 404, 2% 403.
const STATUS_WEIGHTS: [(u16, usize); 3] = [(200, 95), (404, 3), (403, 2)];

/// Creates log files of random, chronologically sorted entries.
pub struct LogfileCreator {
    codes: Vec<u16>,
}

impl LogfileCreator {
    /// Build the creator with its weighted status-code lookup table
    /// (one slot per percentage point).
    pub fn new() -> Self {
        let codes = STATUS_WEIGHTS
            .iter()
            .flat_map(|&(code, weight)| std::iter::repeat(code).take(weight))
            .collect();
        Self { codes }
    }

    /// Create a single random entry within the analyzer's bucket
    /// ranges. Days stay in 1..=28 to avoid per-month length logic.
    pub fn create_entry(&self, rng: &mut impl Rng) -> LogEntry {
        let year = BASE_YEAR + rng.random_range(0..YEAR_SPAN as i32);
        let month = 1 + rng.random_range(0..MONTHS_PER_YEAR as u32);
        let day = 1 + rng.random_range(0..DAYS_PER_MONTH as u32);
        let hour = rng.random_range(0..HOURS_PER_DAY as u32);
        let minute = rng.random_range(0..60);
        let code = self.codes[rng.random_range(0..self.codes.len())];
        LogEntry::new(year, month, day, hour, minute, code)
    }

    /// Generate `num_entries` random entries, sorted chronologically.
    pub fn create_entries(&self, num_entries: usize) -> Result<Vec<LogEntry>> {
        if num_entries == 0 {
            return Err(Error::Validation(
                "number of entries must be greater than zero".to_string(),
            ));
        }
        let mut rng = rand::rng();
        let mut entries: Vec<LogEntry> = (0..num_entries)
            .map(|_| self.create_entry(&mut rng))
            .collect();
        entries.sort();
        Ok(entries)
    }

    /// Write a file of `num_entries` random log lines at `path`.
    pub fn create_file(&self, path: impl AsRef<Path>, num_entries: usize) -> Result<()> {
        let path = path.as_ref();
        let entries = self.create_entries(num_entries)?;

        let mut writer = BufWriter::new(File::create(path)?);
        for entry in &entries {
            writeln!(writer, "{entry}")?;
        }
        writer.flush()?;

        info!("Wrote {num_entries} entries to {}", path.display());
        Ok(())
    }
}

impl Default for LogfileCreator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::LogAnalyzer;
    use crate::source::{LogfileReader, MemorySource};
    use tempfile::TempDir;

    #[test]
    fn test_code_table_has_expected_weights() {
        let creator = LogfileCreator::new();
        assert_eq!(creator.codes.len(), 100);
        assert_eq!(creator.codes.iter().filter(|&&c| c == 200).count(), 95);
        assert_eq!(creator.codes.iter().filter(|&&c| c == 404).count(), 3);
        assert_eq!(creator.codes.iter().filter(|&&c| c == 403).count(), 2);
    }

    #[test]
    fn test_entries_stay_within_bucket_ranges() {
        let creator = LogfileCreator::new();
        let mut rng = rand::rng();
        for _ in 0..500 {
            let entry = creator.create_entry(&mut rng);
            assert!((2015..=2019).contains(&entry.year));
            assert!((1..=12).contains(&entry.month));
            assert!((1..=28).contains(&entry.day));
            assert!(entry.hour <= 23);
            assert!(entry.minute <= 59);
            assert!([200, 403, 404].contains(&entry.status_code));
        }
    }

    #[test]
    fn test_create_entries_sorted_and_counted() {
        let creator = LogfileCreator::new();
        let entries = creator.create_entries(200).unwrap();
        assert_eq!(entries.len(), 200);
        assert!(entries.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_entries_rejected() {
        let creator = LogfileCreator::new();
        assert!(matches!(
            creator.create_entries(0).unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_generated_file_is_fully_analyzable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("access.log");

        let creator = LogfileCreator::new();
        creator.create_file(&path, 150).unwrap();

        let mut analyzer = LogAnalyzer::new(LogfileReader::new(&path));
        analyzer.ingest_all().unwrap();
        assert_eq!(analyzer.total_accesses(), 150);
    }

    #[test]
    fn test_generated_entries_survive_memory_round_trip() {
        let creator = LogfileCreator::new();
        let entries = creator.create_entries(30).unwrap();
        let mut analyzer = LogAnalyzer::new(MemorySource::new(entries));
        analyzer.ingest_all().unwrap();
        assert_eq!(analyzer.total_accesses(), 30);
    }
}
