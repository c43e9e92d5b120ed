//! # loglens
//!
//! Time-bucketed access statistics for web server logs.
//!
//! ## Usage
//!
//! ```bash
//! loglens analyze access.log [--json]
//! loglens generate access.log -n 1000
//! ```
//!
//! ## Modules
//!
//! - `analyzer` - Frequency-table aggregation over a record stream
//! - `cli` - Command implementations for the binary
//! - `generator` - Synthetic log file creation
//! - `query` - Extremal queries over populated tables
//! - `record` - Log entry type and line-format parsing
//! - `report` - Text and JSON rendering of analysis results
//! - `source` - Record sources (log files, in-memory streams)

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod generator;
pub mod query;
pub mod record;
pub mod report;
pub mod source;
