//! Reading fixture files back into records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::FixtureError;
use crate::record::Record;

/// Parses every line of `reader` as a [`Record`].
///
/// Every line, including the last, must end in a single `\n`; carriage
/// returns and a missing final newline are rejected.
///
/// # Errors
///
/// Returns [`FixtureError::Read`] on I/O failure or [`FixtureError::Parse`]
/// for the first malformed line.
pub fn read_records<R: BufRead>(mut reader: R) -> Result<Vec<Record>, FixtureError> {
    let mut records = Vec::new();
    let mut buf = String::new();
    let mut line = 0;
    loop {
        buf.clear();
        let n = reader
            .read_line(&mut buf)
            .map_err(|source| FixtureError::Read { source })?;
        if n == 0 {
            return Ok(records);
        }
        line += 1;
        let Some(text) = buf.strip_suffix('\n') else {
            return Err(FixtureError::Parse {
                line,
                reason: "missing final newline".to_string(),
            });
        };
        if text.ends_with('\r') {
            return Err(FixtureError::Parse {
                line,
                reason: "carriage return before newline".to_string(),
            });
        }
        records.push(Record::parse_line(line, text)?);
    }
}

/// Opens `path` and parses it as a fixture file.
///
/// # Errors
///
/// Returns [`FixtureError::InputUnavailable`] if the file cannot be opened,
/// otherwise the errors of [`read_records`].
pub fn read_fixture(path: &Path) -> Result<Vec<Record>, FixtureError> {
    let file = File::open(path).map_err(|source| FixtureError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(BufReader::new(file))?;
    debug!(path = %path.display(), records = records.len(), "fixture read");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_in_order() {
        let text = "0\t1970-01-01T00:00:00.012345678Z\n86400\t1970-01-02T00:00:00.012345678Z\n";
        let records = read_records(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].epoch_secs(), 86_400);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(read_records(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn reports_line_number_of_bad_line() {
        let text = "0\t1970-01-01T00:00:00Z\n\n";
        let err = read_records(text.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: missing tab separator");
    }

    #[test]
    fn rejects_crlf_terminator() {
        let text = "0\t1970-01-01T00:00:00.012345678Z\r\n";
        let err = read_records(text.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 1: carriage return before newline");
    }

    #[test]
    fn rejects_missing_final_newline() {
        let text = "0\t1970-01-01T00:00:00.012345678Z\n86400\t1970-01-02T00:00:00.012345678Z";
        let err = read_records(text.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: missing final newline");
    }

    #[test]
    fn missing_file_is_input_unavailable() {
        let err = read_fixture(Path::new("/nonexistent/daystep/time.txt")).unwrap_err();
        assert!(matches!(err, FixtureError::InputUnavailable { .. }));
    }
}
