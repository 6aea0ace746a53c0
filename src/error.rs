use crate::model::Offset;

/// Error type for record log operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested offset has not been assigned yet.
    ///
    /// Callers can match on this variant directly; the offset that was asked
    /// for is carried in the error.
    OffsetNotFound(Offset),
    /// Invalid input or parameter errors
    InvalidInput(String),
    /// Encoding/decoding errors
    Encoding(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::OffsetNotFound(offset) => write!(f, "offset not found: {}", offset),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

/// Result type alias for record log operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compare_offset_not_found_by_value() {
        // given
        let err = Error::OffsetNotFound(42);

        // then - distinguishable without string matching
        assert_eq!(err, Error::OffsetNotFound(42));
        assert_ne!(err, Error::OffsetNotFound(43));
        assert_ne!(err, Error::InvalidInput("offset not found: 42".to_string()));
    }

    #[test]
    fn should_display_offset_in_message() {
        // given
        let err = Error::OffsetNotFound(7);

        // when
        let msg = err.to_string();

        // then
        assert_eq!(msg, "offset not found: 7");
    }
}
