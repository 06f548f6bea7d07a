//! Day-of-year newtype and month tables for the proleptic Gregorian calendar.

use crate::date::{days_in_month, days_in_year, is_leap_year};
use crate::error::CalendarError;

/// Ordinal day within a Gregorian year (1..=365, or 1..=366 in leap years).
///
/// A `Doy` does not carry its year; conversions back to `(month, day)` take
/// the year as an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

impl Doy {
    /// Creates a new `Doy` for the given year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in
    /// `1..=days_in_year(year)`.
    pub fn new(year: i64, doy: u16) -> Result<Self, CalendarError> {
        let max_doy = days_in_year(year);
        if !(1..=max_doy).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy, year, max_doy });
        }
        Ok(Self(doy))
    }

    /// Creates a new `Doy` from a civil `(year, month, day)` triple.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month of that year.
    pub fn from_ymd(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self::from_valid_ymd(year, month, day))
    }

    /// Builds a `Doy` from a civil date that is already known to be valid.
    pub(crate) fn from_valid_ymd(year: i64, month: u8, day: u8) -> Self {
        let leap_shift = u16::from(month > 2 && is_leap_year(year));
        Self(MONTH_START_DOY[usize::from(month)] + u16::from(day) - 1 + leap_shift)
    }

    /// Returns the inner day-of-year value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the `(month, day)` pair for this day-of-year in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if this is day 366 and `year`
    /// is not a leap year.
    pub fn month_day(self, year: i64) -> Result<(u8, u8), CalendarError> {
        let doy = Self::new(year, self.0)?.0;
        let leap = is_leap_year(year);
        let mut month = 12;
        while month > 1 {
            let start = MONTH_START_DOY[month] + u16::from(leap && month > 2);
            if doy >= start {
                break;
            }
            month -= 1;
        }
        let start = MONTH_START_DOY[month] + u16::from(leap && month > 2);
        // month in 1..=12 and the offset is below 31, both fit in u8
        Ok((month as u8, (doy - start + 1) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert_eq!(Doy::new(2001, 1).unwrap().get(), 1);
        assert_eq!(Doy::new(2001, 365).unwrap().get(), 365);
        assert_eq!(Doy::new(2000, 366).unwrap().get(), 366);
    }

    #[test]
    fn new_invalid_zero() {
        assert_eq!(
            Doy::new(2001, 0).unwrap_err(),
            CalendarError::InvalidDoy {
                doy: 0,
                year: 2001,
                max_doy: 365,
            }
        );
    }

    #[test]
    fn new_366_in_common_year() {
        assert_eq!(
            Doy::new(1900, 366).unwrap_err(),
            CalendarError::InvalidDoy {
                doy: 366,
                year: 1900,
                max_doy: 365,
            }
        );
    }

    #[test]
    fn from_ymd_common_year() {
        assert_eq!(Doy::from_ymd(2001, 1, 1).unwrap().get(), 1);
        assert_eq!(Doy::from_ymd(2001, 2, 28).unwrap().get(), 59);
        assert_eq!(Doy::from_ymd(2001, 3, 1).unwrap().get(), 60);
        assert_eq!(Doy::from_ymd(2001, 12, 31).unwrap().get(), 365);
    }

    #[test]
    fn from_ymd_leap_year() {
        assert_eq!(Doy::from_ymd(2000, 2, 29).unwrap().get(), 60);
        assert_eq!(Doy::from_ymd(2000, 3, 1).unwrap().get(), 61);
        assert_eq!(Doy::from_ymd(2000, 12, 31).unwrap().get(), 366);
    }

    #[test]
    fn from_ymd_feb_29_common_year() {
        assert_eq!(
            Doy::from_ymd(2100, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2100,
                max_day: 28,
            }
        );
    }

    #[test]
    fn from_ymd_invalid_month() {
        assert_eq!(
            Doy::from_ymd(2000, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn roundtrip_leap_and_common() {
        for year in [1970, 2000, 2100, 2024] {
            for d in 1..=days_in_year(year) {
                let doy = Doy::new(year, d).unwrap();
                let (m, day) = doy.month_day(year).unwrap();
                let back = Doy::from_ymd(year, m, day).unwrap();
                assert_eq!(doy, back, "roundtrip failed for {year} doy {d}: ({m}, {day})");
            }
        }
    }

    #[test]
    fn month_day_366_needs_leap_year() {
        let doy = Doy::new(2000, 366).unwrap();
        assert_eq!(doy.month_day(2000).unwrap(), (12, 31));
        assert!(doy.month_day(2001).is_err());
    }

    #[test]
    fn table_integrity_days_per_month() {
        let total: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn table_integrity_month_start() {
        for m in 1..12usize {
            assert_eq!(
                MONTH_START_DOY[m] + u16::from(DAYS_PER_MONTH[m]),
                MONTH_START_DOY[m + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
        }
    }
}
