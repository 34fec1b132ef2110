//! Error types for color input parsing
//!
//! Errors fall into three groups: the input has the wrong shape (token
//! count, hex length), a token is not a valid number, or the format selector
//! is unknown.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

/// Error type for parsing a color line or a format selector.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Space-separated input did not contain the expected number of tokens
    TokenCount {
        /// Number of tokens required
        expected: usize,
        /// Number of tokens found
        found: usize,
    },
    /// Hex input is not exactly 6 characters long
    InvalidLength {
        /// Number of characters found
        found: usize,
    },
    /// A token is not a valid floating-point number
    InvalidFloat(ParseFloatError),
    /// A token is not a valid integer
    InvalidInteger(ParseIntError),
    /// A hex digit pair contains something other than `0-9a-fA-F`
    InvalidHex(String),
    /// Format selector is not one of 0, 1 or 2
    InvalidSelector(String),
}

impl From<ParseFloatError> for ParseColorError {
    fn from(err: ParseFloatError) -> Self {
        ParseColorError::InvalidFloat(err)
    }
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidInteger(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::TokenCount { expected, found } => {
                write!(f, "expected {} space-separated values, got {}", expected, found)
            }
            ParseColorError::InvalidLength { found } => {
                write!(
                    f,
                    "invalid hex color length (expected 6 characters, got {})",
                    found
                )
            }
            ParseColorError::InvalidFloat(err) => {
                write!(f, "invalid decimal value: {}", err)
            }
            ParseColorError::InvalidInteger(err) => {
                write!(f, "invalid integer value: {}", err)
            }
            ParseColorError::InvalidHex(pair) => {
                write!(f, "invalid hex digits {:?}", pair)
            }
            ParseColorError::InvalidSelector(selector) => {
                write!(f, "unknown input format {:?} (expected 0, 1 or 2)", selector)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidFloat(err) => Some(err),
            ParseColorError::InvalidInteger(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let error = ParseColorError::TokenCount {
            expected: 3,
            found: 2,
        };
        assert_eq!(error.to_string(), "expected 3 space-separated values, got 2");

        let error = ParseColorError::InvalidLength { found: 2 };
        assert_eq!(
            error.to_string(),
            "invalid hex color length (expected 6 characters, got 2)"
        );

        let error = ParseColorError::InvalidHex("+F".to_string());
        assert_eq!(error.to_string(), "invalid hex digits \"+F\"");

        let error = ParseColorError::InvalidSelector("7".to_string());
        assert_eq!(
            error.to_string(),
            "unknown input format \"7\" (expected 0, 1 or 2)"
        );
    }

    #[test]
    fn test_source_is_exposed_for_numeric_errors() {
        let err = "x".parse::<f64>().unwrap_err();
        assert!(ParseColorError::from(err).source().is_some());

        let err = "x".parse::<i64>().unwrap_err();
        assert!(ParseColorError::from(err).source().is_some());

        assert!(ParseColorError::InvalidLength { found: 0 }.source().is_none());
        assert!(ParseColorError::InvalidHex("GG".to_string()).source().is_none());
    }
}
