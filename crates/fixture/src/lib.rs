//! # daystep-fixture
//!
//! Generate, read and verify the day-stepped timestamp fixture: one line per
//! step, `<epoch_seconds>\t<rfc3339_nanos_utc>\n`, in ascending time order.
//!
//! ```ignore
//! use daystep_fixture::{FixtureSpec, write_fixture, verify_fixture};
//!
//! let spec = FixtureSpec::default(); // 1970-01-01T00:00:00.012345678Z, 401 years
//! let summary = write_fixture("time.txt".as_ref(), &spec)?;
//! assert_eq!(summary.count(), 146_462);
//! verify_fixture("time.txt".as_ref(), &spec)?;
//! ```

mod error;
mod reader;
mod record;
mod spec;
mod validate;
mod writer;

pub use error::FixtureError;
pub use reader::{read_fixture, read_records};
pub use record::Record;
pub use spec::{DEFAULT_FILE_NAME, DEFAULT_SPAN_YEARS, DEFAULT_START_UNIX_NANOS, FixtureSpec};
pub use validate::{VerifyReport, verify_fixture, verify_records};
pub use writer::{Records, WriteSummary, records, write_fixture, write_records};
