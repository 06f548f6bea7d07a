//! UTC instants and their RFC3339 rendering.

use std::fmt;

use crate::date::{CivilDateTime, civil_to_days};
use crate::error::CalendarError;

/// Nanoseconds in one second.
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Seconds in one fixed-length day. Leap seconds are not modelled.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A point in time as seconds since the Unix epoch plus a sub-second part.
///
/// The nanosecond part is always in `0..NANOS_PER_SEC`, so instants before
/// the epoch carry a negative second count and a positive fraction. Ordering
/// is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    secs: i64,
    nanos: u32,
}

impl Instant {
    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const EPOCH: Instant = Instant { secs: 0, nanos: 0 };

    /// Creates an instant from epoch seconds and nanoseconds.
    ///
    /// Nanoseconds of a full second or more are carried into `secs`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the carry overflows `i64`.
    pub fn from_unix(secs: i64, nanos: u32) -> Result<Self, CalendarError> {
        let carry = i64::from(nanos / NANOS_PER_SEC);
        let secs = secs
            .checked_add(carry)
            .ok_or_else(|| CalendarError::Overflow {
                reason: format!("{secs}s + {nanos}ns"),
            })?;
        Ok(Self {
            secs,
            nanos: nanos % NANOS_PER_SEC,
        })
    }

    /// Creates an instant from a signed count of nanoseconds since the epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the second count does not fit
    /// in an `i64`.
    pub fn from_unix_nanos(total: i128) -> Result<Self, CalendarError> {
        let per_sec = i128::from(NANOS_PER_SEC);
        let secs = i64::try_from(total.div_euclid(per_sec))
            .map_err(|_| CalendarError::Overflow {
                reason: format!("{total}ns since epoch"),
            })?;
        // rem_euclid is in 0..1e9, which always fits in u32
        let nanos = total.rem_euclid(per_sec) as u32;
        Ok(Self { secs, nanos })
    }

    /// Returns midnight UTC at the start of the given civil date.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if the date is invalid or out of range.
    pub fn from_civil(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        let days = civil_to_days(year, month, day)?;
        let secs = days
            .checked_mul(SECONDS_PER_DAY)
            .ok_or_else(|| CalendarError::Overflow {
                reason: format!("seconds at {year}-{month:02}-{day:02}"),
            })?;
        Ok(Self { secs, nanos: 0 })
    }

    /// Returns whole seconds since the epoch (floored).
    pub fn secs(self) -> i64 {
        self.secs
    }

    /// Returns the sub-second nanoseconds.
    pub fn nanos(self) -> u32 {
        self.nanos
    }

    /// Returns total nanoseconds since the epoch.
    pub fn unix_nanos(self) -> i128 {
        i128::from(self.secs) * i128::from(NANOS_PER_SEC) + i128::from(self.nanos)
    }

    /// Adds a signed number of whole seconds, returning `None` on overflow.
    pub fn checked_add_secs(self, secs: i64) -> Option<Self> {
        Some(Self {
            secs: self.secs.checked_add(secs)?,
            nanos: self.nanos,
        })
    }

    /// Returns the civil UTC breakdown of this instant.
    pub fn civil(self) -> CivilDateTime {
        let days = self.secs.div_euclid(SECONDS_PER_DAY);
        // rem_euclid is in 0..86400
        let second_of_day = self.secs.rem_euclid(SECONDS_PER_DAY) as u32;
        CivilDateTime::from_parts(days, second_of_day, self.nanos)
    }

    /// Returns the calendar year of this instant in UTC.
    pub fn year(self) -> i64 {
        self.civil().year()
    }

    /// Renders this instant as RFC3339 in UTC with up to nanosecond precision.
    ///
    /// Trailing zeros of the fraction are dropped, and the fraction is omitted
    /// when the instant falls on a whole second: `2006-01-02T15:04:05.999999999Z`.
    pub fn to_rfc3339_nanos(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Instant {
    /// See [`Instant::to_rfc3339_nanos`] and <https://rfc-editor.org/rfc/rfc3339.html>.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.civil();
        if c.year() < 0 {
            write!(f, "-{:04}", c.year().unsigned_abs())?;
        } else {
            write!(f, "{:04}", c.year())?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            c.month(),
            c.day(),
            c.hour(),
            c.minute(),
            c.second()
        )?;
        if self.nanos != 0 {
            let mut frac = self.nanos;
            let mut width: usize = 9;
            while frac % 10 == 0 {
                frac /= 10;
                width -= 1;
            }
            write!(f, ".{frac:0width$}")?;
        }
        f.write_str("Z")
    }
}
