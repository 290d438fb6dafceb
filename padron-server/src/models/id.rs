//! Path identifier validation
//!
//! Identifiers arrive as a path segment and must be purely numeric.
//! Matches the column type: ^\d+$ within i32 range.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Purely-numeric identifier pattern
static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("invalid id regex"));

/// Validated persona identifier from a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaId(i32);

impl PersonaId {
    /// Parse a path segment into an identifier.
    ///
    /// # Rules
    /// - Decimal digits only (no sign, no whitespace)
    /// - Must fit the store's integer key type
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        if !ID_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a decimal integer",
            });
        }

        s.parse::<i32>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "exceeds the identifier range",
        })
    }

    /// Get the numeric value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(PersonaId::parse("1").unwrap().get(), 1);
        assert_eq!(PersonaId::parse("2147483647").unwrap().get(), i32::MAX);
    }

    #[test]
    fn rejects_empty() {
        let err = PersonaId::parse("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "id" }));
    }

    #[test]
    fn rejects_non_numeric() {
        for raw in ["abc", "7a", "1.5", " 7", "7 "] {
            let err = PersonaId::parse(raw).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidFormat { .. }), "{raw}");
        }
    }

    #[test]
    fn rejects_signed() {
        // The pattern is digits only; a sign means the segment is not an id
        assert!(PersonaId::parse("-3").is_err());
        assert!(PersonaId::parse("+3").is_err());
    }

    #[test]
    fn rejects_out_of_range() {
        let err = PersonaId::parse("2147483648").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat { reason: "exceeds the identifier range", .. }
        ));
    }
}
