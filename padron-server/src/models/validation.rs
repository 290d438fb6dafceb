//! Validation error types

use std::fmt;

/// Validation error for request payloads and path identifiers
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// One or more required fields are absent or empty
    MissingFields { fields: Vec<&'static str> },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't match the required format
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_enumerates_every_field() {
        let err = ValidationError::MissingFields {
            fields: vec!["nombre", "dni"],
        };
        assert_eq!(err.to_string(), "missing required fields: nombre, dni");
    }

    #[test]
    fn invalid_format_display() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be a decimal integer",
        };
        assert_eq!(err.to_string(), "id: must be a decimal integer");
    }
}
