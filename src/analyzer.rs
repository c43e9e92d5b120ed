//! Time-bucketed aggregation of access log records
//!
//! `LogAnalyzer` drains a `RecordSource` into five fixed-size frequency
//! tables (hour, day-of-month, day-of-week, month, year) and exposes
//! extremal queries over them.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::query;
use crate::record::LogEntry;
use crate::source::RecordSource;

/// Number of hour buckets (0..=23).
pub const HOURS_PER_DAY: usize = 24;
/// Number of day-of-month buckets (days 1..=28; months are modeled as
/// four exact weeks).
pub const DAYS_PER_MONTH: usize = 28;
/// Number of day-of-week buckets.
pub const DAYS_PER_WEEK: usize = 7;
/// Number of month buckets (1..=12).
pub const MONTHS_PER_YEAR: usize = 12;
/// Number of year buckets, starting at `BASE_YEAR`.
pub const YEAR_SPAN: usize = 5;
/// First year the year table covers.
pub const BASE_YEAR: i32 = 2015;

/// Aggregates a record stream into per-dimension frequency tables.
///
/// Construction allocates zeroed tables and never touches the source;
/// the caller triggers aggregation explicitly with
/// [`ingest_all`](LogAnalyzer::ingest_all) and queries afterwards.
/// Re-ingesting without a [`reset`](LogAnalyzer::reset) in between
/// would double count.
pub struct LogAnalyzer<S: RecordSource> {
    source: S,
    hour_counts: [u64; HOURS_PER_DAY],
    day_counts: [u64; DAYS_PER_MONTH],
    weekday_counts: [u64; DAYS_PER_WEEK],
    month_counts: [u64; MONTHS_PER_YEAR],
    year_counts: [u64; YEAR_SPAN],
}

impl<S: RecordSource> LogAnalyzer<S> {
    /// Create an analyzer over the given source with all tables zeroed.
    pub fn new(source: S) -> Self {
        Self {
            source,
            hour_counts: [0; HOURS_PER_DAY],
            day_counts: [0; DAYS_PER_MONTH],
            weekday_counts: [0; DAYS_PER_WEEK],
            month_counts: [0; MONTHS_PER_YEAR],
            year_counts: [0; YEAR_SPAN],
        }
    }

    /// Zero every table. Idempotent; does not touch the source.
    pub fn reset(&mut self) {
        self.hour_counts = [0; HOURS_PER_DAY];
        self.day_counts = [0; DAYS_PER_MONTH];
        self.weekday_counts = [0; DAYS_PER_WEEK];
        self.month_counts = [0; MONTHS_PER_YEAR];
        self.year_counts = [0; YEAR_SPAN];
    }

    /// Rewind the source and aggregate every record into all tables,
    /// then fold the day table into the day-of-week table.
    ///
    /// A record outside the declared bucket ranges is a fatal
    /// `Error::OutOfRange`; nothing is clamped or dropped, because a
    /// silently skipped record would corrupt the aggregate totals
    /// invisibly. On any error mid-pass the tables are zeroed before
    /// the error propagates, so no partial aggregate is observable.
    pub fn ingest_all(&mut self) -> Result<()> {
        if let Err(e) = self.ingest_pass() {
            self.reset();
            return Err(e);
        }
        self.fold_weekdays();
        info!("Aggregated {} accesses", self.total_accesses());
        Ok(())
    }

    fn ingest_pass(&mut self) -> Result<()> {
        self.source.rewind()?;
        let mut ingested = 0u64;
        while let Some(entry) = self.source.next_entry()? {
            self.ingest_entry(&entry)?;
            ingested += 1;
        }
        debug!("Ingested {ingested} records");
        Ok(())
    }

    fn ingest_entry(&mut self, entry: &LogEntry) -> Result<()> {
        let hour = bucket_index("hour", entry.hour as i64, 0, HOURS_PER_DAY as i64 - 1)?;
        let day = bucket_index("day", entry.day as i64, 1, DAYS_PER_MONTH as i64)? - 1;
        let month = bucket_index("month", entry.month as i64, 1, MONTHS_PER_YEAR as i64)? - 1;
        let last_year = BASE_YEAR as i64 + YEAR_SPAN as i64 - 1;
        let year = bucket_index("year", entry.year as i64, BASE_YEAR as i64, last_year)?
            - BASE_YEAR as usize;

        self.hour_counts[hour] += 1;
        self.day_counts[day] += 1;
        self.month_counts[month] += 1;
        self.year_counts[year] += 1;
        Ok(())
    }

    /// Fold the 28 day-of-month buckets into 7 weekday buckets. Day 1
    /// is weekday 0, so bucket i lands on weekday i mod 7. This relies
    /// on the log's synthetic week-aligned days, not real calendars.
    fn fold_weekdays(&mut self) {
        self.weekday_counts = [0; DAYS_PER_WEEK];
        for (index, &count) in self.day_counts.iter().enumerate() {
            self.weekday_counts[index % DAYS_PER_WEEK] += count;
        }
    }

    /// Total number of accesses aggregated so far; 0 before any ingest.
    pub fn total_accesses(&self) -> u64 {
        self.hour_counts.iter().sum()
    }

    pub fn hour_counts(&self) -> &[u64] {
        &self.hour_counts
    }

    pub fn day_counts(&self) -> &[u64] {
        &self.day_counts
    }

    pub fn weekday_counts(&self) -> &[u64] {
        &self.weekday_counts
    }

    pub fn month_counts(&self) -> &[u64] {
        &self.month_counts
    }

    pub fn year_counts(&self) -> &[u64] {
        &self.year_counts
    }

    /// Hour (0..=23) with the most accesses; lowest hour wins ties.
    pub fn busiest_hour(&self) -> usize {
        query::busiest_bucket(&self.hour_counts)
    }

    /// Hour (0..=23) with the fewest accesses; lowest hour wins ties.
    pub fn quietest_hour(&self) -> usize {
        query::quietest_bucket(&self.hour_counts)
    }

    /// Starting hour of the busiest contiguous two-hour window.
    pub fn busiest_two_hour_window(&self) -> usize {
        query::busiest_two_hour_window(&self.hour_counts)
    }

    /// Every hour tied for the maximum access count, ascending.
    pub fn busiest_hours(&self) -> Vec<usize> {
        query::all_tied_maxima(&self.hour_counts)
    }

    /// Day of month (1..=28) with the most accesses.
    pub fn busiest_day(&self) -> u32 {
        query::busiest_bucket(&self.day_counts) as u32 + 1
    }

    /// Day of month (1..=28) with the fewest accesses.
    pub fn quietest_day(&self) -> u32 {
        query::quietest_bucket(&self.day_counts) as u32 + 1
    }

    /// Month (1..=12) with the most accesses.
    pub fn busiest_month(&self) -> u32 {
        query::busiest_bucket(&self.month_counts) as u32 + 1
    }

    /// Month (1..=12) with the fewest accesses.
    pub fn quietest_month(&self) -> u32 {
        query::quietest_bucket(&self.month_counts) as u32 + 1
    }
}

/// Validate that `value` lies in `min..=max` and return it as a usize
/// offset. Out-of-range values fail loudly instead of wrapping.
fn bucket_index(field: &'static str, value: i64, min: i64, max: i64) -> Result<usize> {
    if value < min || value > max {
        return Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value as usize)
}
