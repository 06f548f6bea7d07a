//! Error types for daystep-fixture.

use std::path::PathBuf;

use daystep_calendar::CalendarError;

/// Error type for all fallible operations in the daystep-fixture crate.
///
/// Covers the output file that cannot be created, I/O failures while
/// writing or reading records, malformed fixture lines, invalid generation
/// parameters, and accumulated verification failures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Returned when the output file cannot be created or truncated.
    #[error("cannot create output file {}", path.display())]
    OutputUnavailable {
        /// Path that could not be opened for writing.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when an input fixture file cannot be opened.
    #[error("cannot open fixture file {}", path.display())]
    InputUnavailable {
        /// Path that could not be opened for reading.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Wraps an I/O failure while writing or flushing records.
    #[error("failed to write fixture records")]
    Write {
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Wraps an I/O failure while reading records.
    #[error("failed to read fixture records")]
    Read {
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a fixture line is not `<epoch_seconds>\t<timestamp>`.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Returned when the generation parameters cannot describe a fixture.
    #[error("invalid fixture spec: {reason}")]
    InvalidSpec {
        /// Description of the rejected parameter.
        reason: String,
    },

    /// Wraps an error originating from the daystep-calendar crate.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Returned when one or more verification checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}
