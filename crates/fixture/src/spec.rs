//! Generation parameters for a day-stepped fixture.

use daystep_calendar::{DaySteps, Instant, SECONDS_PER_DAY};

use crate::error::FixtureError;

/// Conventional name of the generated fixture file.
pub const DEFAULT_FILE_NAME: &str = "time.txt";

/// Start instant of the reference fixture, in nanoseconds since the epoch.
pub const DEFAULT_START_UNIX_NANOS: i128 = 12_345_678;

/// Number of calendar years covered by the reference fixture.
pub const DEFAULT_SPAN_YEARS: u32 = 401;

/// Parameters describing which records a fixture contains.
///
/// Records start at `start_unix_nanos`, advance by `step_secs`, and stop
/// before the first instant whose UTC year reaches the start year plus
/// `span_years`. The [`Default`] implementation is the reference fixture:
/// one day steps from `1970-01-01T00:00:00.012345678Z` up to the end of 2370.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSpec {
    start_unix_nanos: i128,
    step_secs: i64,
    span_years: u32,
}

impl Default for FixtureSpec {
    fn default() -> Self {
        Self {
            start_unix_nanos: DEFAULT_START_UNIX_NANOS,
            step_secs: SECONDS_PER_DAY,
            span_years: DEFAULT_SPAN_YEARS,
        }
    }
}

impl FixtureSpec {
    /// Sets the start instant as nanoseconds since the epoch.
    pub fn with_start_unix_nanos(mut self, nanos: i128) -> Self {
        self.start_unix_nanos = nanos;
        self
    }

    /// Sets the step between records, in seconds.
    pub fn with_step_secs(mut self, secs: i64) -> Self {
        self.step_secs = secs;
        self
    }

    /// Sets how many calendar years the fixture spans.
    pub fn with_span_years(mut self, years: u32) -> Self {
        self.span_years = years;
        self
    }

    /// Returns the start instant in nanoseconds since the epoch.
    pub fn start_unix_nanos(&self) -> i128 {
        self.start_unix_nanos
    }

    /// Returns the step between records, in seconds.
    pub fn step_secs(&self) -> i64 {
        self.step_secs
    }

    /// Returns the number of calendar years spanned.
    pub fn span_years(&self) -> u32 {
        self.span_years
    }

    /// Returns the first record's instant.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Calendar`] if the start is out of range.
    pub fn start(&self) -> Result<Instant, FixtureError> {
        Ok(Instant::from_unix_nanos(self.start_unix_nanos)?)
    }

    /// Returns the first UTC year excluded from the fixture.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Calendar`] if the start is out of range, or
    /// [`FixtureError::InvalidSpec`] if the stop year overflows.
    pub fn stop_year(&self) -> Result<i64, FixtureError> {
        let start_year = self.start()?.year();
        start_year
            .checked_add(i64::from(self.span_years))
            .ok_or_else(|| FixtureError::InvalidSpec {
                reason: format!("stop year overflows: {start_year} + {}", self.span_years),
            })
    }

    /// Validates this spec.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidSpec`] if the step or span is not
    /// positive, or if the start or stop instant is out of range.
    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.step_secs <= 0 {
            return Err(FixtureError::InvalidSpec {
                reason: format!("step_secs must be greater than 0, got {}", self.step_secs),
            });
        }
        if self.span_years == 0 {
            return Err(FixtureError::InvalidSpec {
                reason: "span_years must be greater than 0".to_string(),
            });
        }
        let stop_year = self.stop_year()?;
        Instant::from_civil(stop_year, 1, 1)?;
        Ok(())
    }

    /// Returns the instants of every record, in order.
    ///
    /// # Errors
    ///
    /// Returns the [`validate`](Self::validate) error for an invalid spec.
    pub fn steps(&self) -> Result<DaySteps, FixtureError> {
        self.validate()?;
        Ok(DaySteps::new(self.start()?, self.step_secs, self.stop_year()?)?)
    }

    /// Returns the number of records without generating them.
    ///
    /// The stop boundary is midnight on January 1 of the stop year; a record
    /// is included while its whole-second part is strictly before it.
    ///
    /// # Errors
    ///
    /// Returns the [`validate`](Self::validate) error for an invalid spec.
    pub fn expected_len(&self) -> Result<u64, FixtureError> {
        self.validate()?;
        let start = self.start()?;
        let stop = Instant::from_civil(self.stop_year()?, 1, 1)?;
        let span = i128::from(stop.secs()) - i128::from(start.secs());
        if span <= 0 {
            return Ok(0);
        }
        let step = i128::from(self.step_secs);
        let count = (span + step - 1) / step;
        u64::try_from(count).map_err(|_| FixtureError::InvalidSpec {
            reason: format!("record count {count} does not fit in u64"),
        })
    }
}
