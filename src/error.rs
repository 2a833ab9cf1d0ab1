use crate::MAX_N;

/// Errors reported while reading, validating or computing an index
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    #[error("invalid input '{0}': expected a base-10 integer")]
    InvalidInput(String),

    #[error("index {0} is out of range: expected 0..={max}", max = MAX_N)]
    OutOfRange(String),

    #[error("invalid argument {0}: the calculator accepts 0..={max}", max = MAX_N)]
    InvalidArgument(i64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            FibError::InvalidInput("abc".into()).to_string(),
            "invalid input 'abc': expected a base-10 integer"
        );
        assert_eq!(
            FibError::OutOfRange("47".into()).to_string(),
            "index 47 is out of range: expected 0..=46"
        );
        assert_eq!(
            FibError::InvalidArgument(-1).to_string(),
            "invalid argument -1: the calculator accepts 0..=46"
        );
    }

    #[test]
    fn io_errors_are_reported_once() {
        let err = FibError::from(std::io::Error::other("stdin closed"));
        assert_eq!(err.to_string(), "stdin closed");
        assert_eq!(anyhow::Error::from(err).chain().count(), 1);
    }
}
