use std::io::BufRead;
use std::num::IntErrorKind;

use tracing::debug;

use crate::{FibError, Result, MAX_N};

/// Parses one line of user input into a validated index.
///
/// Integers that do not fit in an `i64` are still integers, so they are
/// reported as out of range rather than as invalid input.
pub fn parse_index(line: &str) -> Result<u32> {
    let text = line.trim();
    let n = match text.parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    FibError::OutOfRange(text.to_string())
                }
                _ => FibError::InvalidInput(text.to_string()),
            });
        }
    };

    match u32::try_from(n) {
        Ok(index) if index <= MAX_N => Ok(index),
        _ => Err(FibError::OutOfRange(n.to_string())),
    }
}

/// Reads a single line from `reader` and parses it with [`parse_index`].
pub fn read_index<R: BufRead>(mut reader: R) -> Result<u32> {
    let mut buf = Vec::new();
    let read = reader.read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Err(FibError::InvalidInput(String::new()));
    }
    let line = String::from_utf8(buf).map_err(|e| {
        FibError::InvalidInput(String::from_utf8_lossy(e.as_bytes()).trim().to_string())
    })?;
    debug!(bytes = read, line = line.trim_end(), "read input line");
    parse_index(&line)
}
