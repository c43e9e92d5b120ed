//! Record sources: where log entries come from
//!
//! The analyzer only sees the `RecordSource` trait, so tests can feed
//! it in-memory entries while the CLI reads real log files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::LogEntry;

/// A restartable, finite stream of log entries.
///
/// The aggregator rewinds the source at the start of every ingestion
/// pass, so implementations must support iterating from the beginning
/// more than once and must yield the same entries each time.
pub trait RecordSource {
    /// Restart iteration from the first entry.
    fn rewind(&mut self) -> Result<()>;

    /// Produce the next entry, or `Ok(None)` at end of stream.
    fn next_entry(&mut self) -> Result<Option<LogEntry>>;
}

/// File-backed record source reading one log line per entry.
///
/// Lines are parsed lazily as they are consumed; a malformed line
/// surfaces as an error from `next_entry` rather than being skipped.
pub struct LogfileReader {
    path: PathBuf,
    lines: Option<std::io::Lines<BufReader<File>>>,
    line_number: usize,
}

impl LogfileReader {
    /// Create a reader for the given log file. The file is not opened
    /// until the first `rewind`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: None,
            line_number: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for LogfileReader {
    fn rewind(&mut self) -> Result<()> {
        debug!("Opening log file {}", self.path.display());
        let file = File::open(&self.path)?;
        self.lines = Some(BufReader::new(file).lines());
        self.line_number = 0;
        Ok(())
    }

    fn next_entry(&mut self) -> Result<Option<LogEntry>> {
        let lines = match self.lines.as_mut() {
            Some(lines) => lines,
            None => return Ok(None),
        };

        match lines.next() {
            Some(line) => {
                self.line_number += 1;
                let line = line?;
                line.parse::<LogEntry>()
                    .map(Some)
                    .map_err(|e| match e {
                        Error::Parse(msg) => Error::Parse(format!(
                            "{}:{}: {msg}",
                            self.path.display(),
                            self.line_number
                        )),
                        other => other,
                    })
            }
            None => Ok(None),
        }
    }
}

/// In-memory record source backed by a vector of entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<LogEntry>,
    position: usize,
}

impl MemorySource {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self {
            entries,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RecordSource for MemorySource {
    fn rewind(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }

    fn next_entry(&mut self) -> Result<Option<LogEntry>> {
        match self.entries.get(self.position) {
            Some(entry) => {
                self.position += 1;
                Ok(Some(*entry))
            }
            None => Ok(None),
        }
    }
}
