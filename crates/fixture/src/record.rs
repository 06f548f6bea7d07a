//! One fixture line: epoch seconds paired with the RFC3339 rendering.

use std::fmt;

use daystep_calendar::Instant;

use crate::error::FixtureError;

/// A single fixture record.
///
/// Written as `<epoch_secs>\t<formatted>` followed by a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    epoch_secs: i64,
    formatted: String,
}

impl Record {
    /// Creates a record from its two fields.
    pub fn new(epoch_secs: i64, formatted: impl Into<String>) -> Self {
        Self {
            epoch_secs,
            formatted: formatted.into(),
        }
    }

    /// Creates the record for an instant.
    pub fn from_instant(instant: Instant) -> Self {
        Self {
            epoch_secs: instant.secs(),
            formatted: instant.to_rfc3339_nanos(),
        }
    }

    /// Parses one fixture line (without its line terminator).
    ///
    /// `line` is the 1-based line number used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Parse`] if the tab separator is missing, the
    /// epoch seconds are not a canonical decimal `i64` (no sign prefix, no
    /// leading zeros), or the timestamp is empty.
    pub fn parse_line(line: usize, text: &str) -> Result<Self, FixtureError> {
        let (secs, formatted) = text.split_once('\t').ok_or_else(|| FixtureError::Parse {
            line,
            reason: "missing tab separator".to_string(),
        })?;
        let epoch_secs = secs.parse::<i64>().map_err(|e| FixtureError::Parse {
            line,
            reason: format!("invalid epoch seconds {secs:?}: {e}"),
        })?;
        if epoch_secs.to_string() != secs {
            return Err(FixtureError::Parse {
                line,
                reason: format!("non-canonical epoch seconds {secs:?}"),
            });
        }
        if formatted.is_empty() {
            return Err(FixtureError::Parse {
                line,
                reason: "empty timestamp".to_string(),
            });
        }
        Ok(Self::new(epoch_secs, formatted))
    }

    /// Returns the epoch seconds field.
    pub fn epoch_secs(&self) -> i64 {
        self.epoch_secs
    }

    /// Returns the formatted timestamp field.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.epoch_secs, self.formatted)
    }
}
