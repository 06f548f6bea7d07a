//! # daystep-calendar
//!
//! Pure UTC date arithmetic on the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["epoch nanos"] -->|"Instant::from_unix_nanos()"| B["Instant"]
//!     B -->|".civil()"| C["CivilDateTime"]
//!     C -->|".doy()"| D["Doy"]
//!     B -->|"Display"| E["RFC3339 string"]
//!     B -->|"day_steps()"| F["DaySteps iterator"]
//!     G["days since epoch"] <-->|"days_to_civil() / civil_to_days()"| H["(year, month, day)"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use daystep_calendar::{Instant, day_steps};
//!
//! let start = Instant::from_unix_nanos(12_345_678).unwrap();
//! assert_eq!(start.to_rfc3339_nanos(), "1970-01-01T00:00:00.012345678Z");
//!
//! let n = day_steps(start, 1971).count(); // 365
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `instant` | Epoch instants and RFC3339 rendering |
//! | `date` | Day-number conversions and the civil breakdown |
//! | `doy` | Day-of-year newtype and month tables |
//! | `weekday` | Day of the week |
//! | `sequence` | Fixed-step sequences bounded by a year |
//! | `error` | Error types |

mod date;
mod doy;
mod error;
mod instant;
mod sequence;
mod weekday;

pub use date::{
    CivilDateTime, civil_to_days, days_in_month, days_in_year, days_to_civil, is_leap_year,
};
pub use doy::Doy;
pub use error::CalendarError;
pub use instant::{Instant, NANOS_PER_SEC, SECONDS_PER_DAY};
pub use sequence::{DaySteps, day_steps};
pub use weekday::Weekday;
