//! Fixture verification.
//!
//! Provides [`ValidationCollector`] for gathering every violation into a
//! single [`FixtureError::Validation`], and [`verify_records`] which checks a
//! parsed fixture against the [`FixtureSpec`] that should have produced it.

use std::path::Path;

use daystep_calendar::Instant;
use tracing::info;

use crate::error::FixtureError;
use crate::reader::read_fixture;
use crate::record::Record;
use crate::spec::FixtureSpec;

/// Maximum number of individual messages kept in the error details.
const MAX_DETAILS: usize = 20;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`FixtureError::Validation`].
///
/// Every error is counted, but only the first [`MAX_DETAILS`] messages are
/// kept; a corrupt fixture can otherwise yield one message per line.
pub(crate) struct ValidationCollector {
    count: usize,
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            errors: Vec::new(),
        }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.count += 1;
        if self.errors.len() < MAX_DETAILS {
            self.errors.push(msg.into());
        }
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.count
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(FixtureError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins the kept messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), FixtureError> {
        if self.count == 0 {
            return Ok(());
        }
        let mut details = self.errors.join("; ");
        let omitted = self.count - self.errors.len();
        if omitted > 0 {
            details.push_str(&format!("; ... and {omitted} more"));
        }
        Err(FixtureError::Validation {
            count: self.count,
            details,
        })
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Summary of a fixture that passed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    records: u64,
    first_epoch_secs: Option<i64>,
    last_epoch_secs: Option<i64>,
}

impl VerifyReport {
    /// Returns the number of verified records.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Returns the epoch seconds of the first record, if any.
    pub fn first_epoch_secs(&self) -> Option<i64> {
        self.first_epoch_secs
    }

    /// Returns the epoch seconds of the last record, if any.
    pub fn last_epoch_secs(&self) -> Option<i64> {
        self.last_epoch_secs
    }
}

/// Checks parsed records against the fixture `spec` should produce.
///
/// Each record's timestamp must equal the rendering of its epoch seconds
/// combined with the start's sub-second part, the first record must match
/// the start, consecutive records must differ by exactly one step, no record
/// may fall in or after the stop year, and the record count must equal
/// [`FixtureSpec::expected_len`].
///
/// # Errors
///
/// Returns the [`FixtureSpec::validate`] error for an invalid spec, or
/// [`FixtureError::Validation`] listing every violation found.
pub fn verify_records(
    records: &[Record],
    spec: &FixtureSpec,
) -> Result<VerifyReport, FixtureError> {
    spec.validate()?;
    let start = spec.start()?;
    let stop_year = spec.stop_year()?;
    let expected_len = spec.expected_len()?;

    let mut c = ValidationCollector::new();

    if records.len() as u64 != expected_len {
        c.push(format!(
            "expected {expected_len} records, found {}",
            records.len()
        ));
    }

    if let Some(first) = records.first()
        && first.epoch_secs() != start.secs()
    {
        c.push(format!(
            "first record starts at {}s, expected {}s",
            first.epoch_secs(),
            start.secs()
        ));
    }

    for (i, record) in records.iter().enumerate() {
        check_record(i + 1, record, start.nanos(), stop_year, &mut c);
    }

    for (i, pair) in records.windows(2).enumerate() {
        let step = i128::from(pair[1].epoch_secs()) - i128::from(pair[0].epoch_secs());
        if step != i128::from(spec.step_secs()) {
            c.push(format!(
                "line {}: step {step}s != {}s",
                i + 2,
                spec.step_secs()
            ));
        }
    }

    c.finish()?;

    Ok(VerifyReport {
        records: records.len() as u64,
        first_epoch_secs: records.first().map(Record::epoch_secs),
        last_epoch_secs: records.last().map(Record::epoch_secs),
    })
}

/// Checks one record's timestamp and year.
fn check_record(
    line: usize,
    record: &Record,
    nanos: u32,
    stop_year: i64,
    c: &mut ValidationCollector,
) {
    let instant = match Instant::from_unix(record.epoch_secs(), nanos) {
        Ok(instant) => instant,
        Err(e) => {
            c.push(format!("line {line}: {e}"));
            return;
        }
    };
    let expected = instant.to_rfc3339_nanos();
    if record.formatted() != expected {
        c.push(format!(
            "line {line}: timestamp {:?} != expected {expected:?}",
            record.formatted()
        ));
    }
    if instant.year() >= stop_year {
        c.push(format!(
            "line {line}: year {} is not before stop year {stop_year}",
            instant.year()
        ));
    }
}

/// Reads the fixture at `path` and verifies it with [`verify_records`].
///
/// # Errors
///
/// Returns the errors of [`read_fixture`] and [`verify_records`].
pub fn verify_fixture(path: &Path, spec: &FixtureSpec) -> Result<VerifyReport, FixtureError> {
    let records = read_fixture(path)?;
    let report = verify_records(&records, spec)?;
    info!(path = %path.display(), records = report.records(), "fixture verified");
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
