//! Error types for the daystep-calendar crate.

/// Error type for all fallible operations in the daystep-calendar crate.
///
/// Covers validation of civil date components (month, day, day-of-year),
/// non-positive step sizes, and arithmetic that would leave the range of
/// representable instants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range for its year.
    #[error("invalid day of year: {doy} for year {year} (must be 1..={max_doy})")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
        /// The year the day-of-year was checked against.
        year: i64,
        /// The last valid day-of-year in that year (365 or 366).
        max_doy: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year of the month, needed for February.
        year: i64,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a sequence step is zero or negative.
    #[error("invalid step: {step_secs}s (must be > 0)")]
    InvalidStep {
        /// The rejected step, in seconds.
        step_secs: i64,
    },

    /// Returned when a conversion or addition leaves the representable range.
    #[error("arithmetic overflow: {reason}")]
    Overflow {
        /// Description of the operation that overflowed.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_doy() {
        let err = CalendarError::InvalidDoy {
            doy: 366,
            year: 2001,
            max_doy: 365,
        };
        assert_eq!(
            err.to_string(),
            "invalid day of year: 366 for year 2001 (must be 1..=365)"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 2100,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 2100-02 (max 28)");
    }

    #[test]
    fn error_invalid_step() {
        let err = CalendarError::InvalidStep { step_secs: 0 };
        assert_eq!(err.to_string(), "invalid step: 0s (must be > 0)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
