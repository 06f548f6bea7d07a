//! Proleptic Gregorian day arithmetic and the civil breakdown of an instant.
//!
//! Day numbers count days since 1970-01-01 and may be negative. Conversions
//! use the 400-year era decomposition (146 097 days per era), shifted so each
//! era starts on March 1 and the leap day falls at the end of the year.

use crate::doy::{DAYS_PER_MONTH, Doy};
use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Days in one 400-year Gregorian cycle.
pub(crate) const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i64, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[usize::from(month)])
    }
}

/// Converts days since 1970-01-01 to a civil `(year, month, day)`.
///
/// Defined for every `i64` day number.
pub fn days_to_civil(days: i64) -> (i64, u8, u8) {
    // split before shifting so the shift cannot overflow
    let shifted = days.rem_euclid(DAYS_PER_ERA) + EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_ERA) + shifted.div_euclid(DAYS_PER_ERA);
    let doe = shifted.rem_euclid(DAYS_PER_ERA); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365], March-based
    let mp = (5 * doy + 2) / 153; // [0, 11], March = 0
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month as u8, day as u8)
}

/// Converts a civil date to days since 1970-01-01.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
/// for an invalid date, and [`CalendarError::Overflow`] if the day number
/// does not fit in an `i64`.
pub fn civil_to_days(year: i64, month: u8, day: u8) -> Result<i64, CalendarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            year,
            max_day,
        });
    }
    let y = if month <= 2 { year.saturating_sub(1) } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era.checked_mul(DAYS_PER_ERA)
        .and_then(|d| d.checked_add(doe - EPOCH_SHIFT))
        .ok_or_else(|| CalendarError::Overflow {
            reason: format!("day number of {year}-{month:02}-{day:02}"),
        })
}

/// Civil UTC breakdown of an [`Instant`](crate::Instant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
    year: i64,
    month: u8,
    day: u8,
    weekday: Weekday,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl CivilDateTime {
    /// Builds the breakdown from days since the epoch, the second within
    /// that day (0..86400) and the nanosecond within that second.
    pub(crate) fn from_parts(days: i64, second_of_day: u32, nanosecond: u32) -> Self {
        let (year, month, day) = days_to_civil(days);
        Self {
            year,
            month,
            day,
            weekday: Weekday::from_days_since_epoch(days),
            hour: (second_of_day / 3600) as u8,
            minute: (second_of_day / 60 % 60) as u8,
            second: (second_of_day % 60) as u8,
            nanosecond,
        }
    }

    /// Returns the proleptic Gregorian year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the nanosecond within the second.
    pub fn nanosecond(self) -> u32 {
        self.nanosecond
    }

    /// Returns the ordinal day within the year.
    pub fn doy(self) -> Doy {
        Doy::from_valid_ymd(self.year, self.month, self.day)
    }
}
