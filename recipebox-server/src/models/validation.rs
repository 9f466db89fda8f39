//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Numeric field could not be parsed
    InvalidNumber { field: &'static str, value: String },

    /// Path id is not an integer
    InvalidId { value: String },

    /// Multipart body could not be read
    MalformedForm { reason: String },

    /// Query string could not be decoded
    MalformedQuery { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { field, value } => {
                write!(f, "{} must be a number, got '{}'", field, value)
            }
            Self::InvalidId { value } => write!(f, "invalid recipe id: '{}'", value),
            Self::MalformedForm { reason } => write!(f, "malformed form data: {}", reason),
            Self::MalformedQuery { reason } => write!(f, "malformed query string: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidNumber {
            field: "protein",
            value: "lots".into(),
        };
        assert_eq!(err.to_string(), "protein must be a number, got 'lots'");
    }
}
