//! Fixed-step instant sequences bounded by a calendar year.

use std::iter::FusedIterator;

use crate::error::CalendarError;
use crate::instant::{Instant, SECONDS_PER_DAY};

/// Iterator over instants spaced by a fixed number of seconds.
///
/// Yields `start`, `start + step`, `start + 2 * step`, ... and stops before
/// the first instant whose UTC year is `>= stop_year`. The sequence also ends
/// if the next instant would overflow.
#[derive(Debug, Clone)]
pub struct DaySteps {
    next: Option<Instant>,
    step_secs: i64,
    stop_year: i64,
}

impl DaySteps {
    /// Creates a sequence with an arbitrary positive step.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidStep`] if `step_secs <= 0`, since the
    /// year bound would then never be reached.
    pub fn new(start: Instant, step_secs: i64, stop_year: i64) -> Result<Self, CalendarError> {
        if step_secs <= 0 {
            return Err(CalendarError::InvalidStep { step_secs });
        }
        Ok(Self {
            next: Some(start),
            step_secs,
            stop_year,
        })
    }

    /// Returns the step between consecutive instants, in seconds.
    pub fn step_secs(&self) -> i64 {
        self.step_secs
    }

    /// Returns the first year that is excluded from the sequence.
    pub fn stop_year(&self) -> i64 {
        self.stop_year
    }
}

impl Iterator for DaySteps {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        let current = self.next?;
        if current.year() >= self.stop_year {
            self.next = None;
            return None;
        }
        self.next = current.checked_add_secs(self.step_secs);
        Some(current)
    }
}

impl FusedIterator for DaySteps {}

/// Steps from `start` one day (86 400 s) at a time until `stop_year`.
///
/// # Example
///
/// ```ignore
/// let start = Instant::from_civil(2000, 12, 30).unwrap();
/// let days: Vec<_> = day_steps(start, 2001).collect();
/// assert_eq!(days.len(), 2); // Dec 30, Dec 31
/// ```
pub fn day_steps(start: Instant, stop_year: i64) -> DaySteps {
    DaySteps {
        next: Some(start),
        step_secs: SECONDS_PER_DAY,
        stop_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_start_is_past_stop() {
        let start = Instant::from_civil(2001, 1, 1).unwrap();
        assert_eq!(day_steps(start, 2001).count(), 0);
    }

    #[test]
    fn year_transition() {
        let start = Instant::from_civil(2000, 12, 30).unwrap();
        let days: Vec<_> = day_steps(start, 2001).collect();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1], Instant::from_civil(2000, 12, 31).unwrap());
    }

    #[test]
    fn leap_year_has_366_steps() {
        let start = Instant::from_civil(2000, 1, 1).unwrap();
        assert_eq!(day_steps(start, 2001).count(), 366);
        let start = Instant::from_civil(2100, 1, 1).unwrap();
        assert_eq!(day_steps(start, 2101).count(), 365);
    }

    #[test]
    fn feb_28_to_feb_29_in_leap_year() {
        let start = Instant::from_civil(2024, 2, 28).unwrap();
        let days: Vec<_> = day_steps(start, 2025).take(2).collect();
        let c = days[1].civil();
        assert_eq!((c.month(), c.day()), (2, 29));
    }

    #[test]
    fn custom_step() {
        let start = Instant::from_civil(2000, 1, 1).unwrap();
        let steps = DaySteps::new(start, 7 * SECONDS_PER_DAY, 2001).unwrap();
        // 366 days / 7 rounded up
        assert_eq!(steps.count(), 53);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            DaySteps::new(Instant::EPOCH, 0, 1971).unwrap_err(),
            CalendarError::InvalidStep { step_secs: 0 }
        );
        assert!(DaySteps::new(Instant::EPOCH, -86_400, 1971).is_err());
    }

    #[test]
    fn ends_on_overflow() {
        let start = Instant::from_unix(i64::MAX - 10, 0).unwrap();
        let mut steps = DaySteps::new(start, 100, i64::MAX).unwrap();
        assert_eq!(steps.next(), Some(start));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);
    }

    #[test]
    fn nanos_survive_stepping() {
        let start = Instant::from_unix_nanos(12_345_678).unwrap();
        assert!(day_steps(start, 1971).all(|t| t.nanos() == 12_345_678));
    }
}
