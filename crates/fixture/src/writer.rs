//! Record generation and fixture output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::iter::FusedIterator;
use std::path::Path;

use daystep_calendar::DaySteps;
use tracing::{debug, info};

use crate::error::FixtureError;
use crate::record::Record;
use crate::spec::FixtureSpec;

/// Lazy iterator over the records of a [`FixtureSpec`], in generation order.
#[derive(Debug, Clone)]
pub struct Records {
    steps: DaySteps,
}

impl Iterator for Records {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        self.steps.next().map(Record::from_instant)
    }
}

impl FusedIterator for Records {}

/// Returns the records described by `spec`.
///
/// # Errors
///
/// Returns the [`FixtureSpec::validate`] error for an invalid spec.
pub fn records(spec: &FixtureSpec) -> Result<Records, FixtureError> {
    Ok(Records {
        steps: spec.steps()?,
    })
}

/// Outcome of writing a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    count: u64,
    first: Option<Record>,
    last: Option<Record>,
}

impl WriteSummary {
    /// Returns the number of records written.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the first record written, if any.
    pub fn first(&self) -> Option<&Record> {
        self.first.as_ref()
    }

    /// Returns the last record written, if any.
    pub fn last(&self) -> Option<&Record> {
        self.last.as_ref()
    }
}

/// Writes every record of `spec` to `writer`, one line each, then flushes.
///
/// # Errors
///
/// Returns the [`FixtureSpec::validate`] error for an invalid spec, or
/// [`FixtureError::Write`] if the sink fails.
pub fn write_records<W: Write>(
    mut writer: W,
    spec: &FixtureSpec,
) -> Result<WriteSummary, FixtureError> {
    let mut summary = WriteSummary {
        count: 0,
        first: None,
        last: None,
    };
    for record in records(spec)? {
        writeln!(writer, "{record}").map_err(|source| FixtureError::Write { source })?;
        if summary.first.is_none() {
            summary.first = Some(record.clone());
        }
        summary.last = Some(record);
        summary.count += 1;
    }
    writer.flush().map_err(|source| FixtureError::Write { source })?;
    Ok(summary)
}

/// Creates (or truncates) `path` and writes the fixture described by `spec`.
///
/// The spec is validated before the file is touched, so an invalid spec
/// leaves any existing file unchanged.
///
/// # Errors
///
/// Returns [`FixtureError::OutputUnavailable`] if the file cannot be
/// created, the [`FixtureSpec::validate`] error for an invalid spec, or
/// [`FixtureError::Write`] if writing fails part way.
pub fn write_fixture(path: &Path, spec: &FixtureSpec) -> Result<WriteSummary, FixtureError> {
    spec.validate()?;
    let file = File::create(path).map_err(|source| FixtureError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?spec, "output file created");

    let summary = write_records(BufWriter::new(file), spec)?;
    info!(
        path = %path.display(),
        records = summary.count(),
        "fixture written"
    );
    Ok(summary)
}
