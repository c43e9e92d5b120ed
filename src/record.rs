//! Log entry value type and its text representation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A single parsed web-access log record.
///
/// Day-of-month is restricted to 1..=28 so that every month has the
/// same shape; this matches the data the synthetic generator produces
/// and keeps the day table a fixed 28 buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogEntry {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub status_code: u16,
}

impl LogEntry {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, status_code: u16) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            status_code,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02} {:02} {:02}:{:02} {}",
            self.year, self.month, self.day, self.hour, self.minute, self.status_code
        )
    }
}

impl FromStr for LogEntry {
    type Err = Error;

    /// Parses the `year month day hour:minute status_code` line format.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(Error::Parse(format!(
                "expected 5 fields in log line, got {}: {line:?}",
                fields.len()
            )));
        }

        let (hour_str, minute_str) = fields[3].split_once(':').ok_or_else(|| {
            Error::Parse(format!("expected hour:minute, got {:?}", fields[3]))
        })?;

        let parse_num = |name: &str, value: &str| {
            value
                .parse::<u32>()
                .map_err(|e| Error::Parse(format!("invalid {name} {value:?}: {e}")))
        };

        let year = fields[0]
            .parse::<i32>()
            .map_err(|e| Error::Parse(format!("invalid year {:?}: {e}", fields[0])))?;
        let month = parse_num("month", fields[1])?;
        let day = parse_num("day", fields[2])?;
        let hour = parse_num("hour", hour_str)?;
        let minute = parse_num("minute", minute_str)?;
        let status_code = fields[4]
            .parse::<u16>()
            .map_err(|e| Error::Parse(format!("invalid status code {:?}: {e}", fields[4])))?;

        if minute > 59 {
            return Err(Error::OutOfRange {
                field: "minute",
                value: minute as i64,
                min: 0,
                max: 59,
            });
        }

        Ok(LogEntry::new(year, month, day, hour, minute, status_code))
    }
}
