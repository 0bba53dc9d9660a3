//! Error types for BTCB numeric primitives
//!
//! Decoders either return a fully valid value or one of these errors; a
//! partially filled value is never handed back.

use thiserror::Error;

/// Result type for text decoding
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for numeric operations
pub type NumericResult<T> = std::result::Result<T, NumericError>;

/// Malformed textual input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty
    #[error("Empty input")]
    Empty,

    /// A character outside the accepted set
    #[error("Invalid character at position {position}")]
    InvalidCharacter { position: usize },

    /// More digits than the target width can hold
    #[error("Too many digits: at most {max}, got {actual}")]
    TooLong { max: usize, actual: usize },

    /// Multi-digit decimal starting with '0'
    #[error("Leading zero in decimal input")]
    LeadingZero,

    /// Value exceeds the maximum of the target width
    #[error("Value overflows the target width")]
    Overflow,

    /// Encoded account has the wrong length
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Account prefix or separator not recognised
    #[error("Invalid account prefix")]
    InvalidPrefix,

    /// Account padding bits are not zero
    #[error("Non-zero account padding bits")]
    InvalidPadding,

    /// Account checksum does not match its key
    #[error("Account checksum mismatch")]
    ChecksumMismatch,
}

impl ParseError {
    /// Get an error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY_INPUT",
            Self::InvalidCharacter { .. } => "INVALID_CHARACTER",
            Self::TooLong { .. } => "TOO_LONG",
            Self::LeadingZero => "LEADING_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::InvalidLength { .. } => "INVALID_LENGTH",
            Self::InvalidPrefix => "INVALID_PREFIX",
            Self::InvalidPadding => "INVALID_PADDING",
            Self::ChecksumMismatch => "CHECKSUM_MISMATCH",
        }
    }
}

/// Numeric operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Text could not be decoded
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// More fractional digits requested than the formatter renders
    #[error("Precision {actual} exceeds the maximum of {max}")]
    PrecisionTooLarge { max: usize, actual: usize },
}

impl NumericError {
    /// Get an error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::PrecisionTooLarge { .. } => "PRECISION_TOO_LARGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ParseError::Overflow.error_code(), "OVERFLOW");
        assert_eq!(
            ParseError::InvalidCharacter { position: 3 }.error_code(),
            "INVALID_CHARACTER"
        );
        assert_eq!(NumericError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(
            NumericError::PrecisionTooLarge { max: 64, actual: 65 }.error_code(),
            "PRECISION_TOO_LARGE"
        );
    }

    #[test]
    fn test_parse_error_passes_through() {
        let err: NumericError = ParseError::LeadingZero.into();
        assert_eq!(err.error_code(), "LEADING_ZERO");
        assert_eq!(err.to_string(), "Leading zero in decimal input");
    }
}
