//! Validated persona payload
//!
//! Create and update take the same four-field body. Every field must be
//! present and non-empty; beyond presence this layer enforces nothing
//! (format, range, and uniqueness belong to the external schema).

use chrono::NaiveDate;
use serde::Deserialize;

use super::ValidationError;

/// Raw request body for create and update.
///
/// All fields optional so absence is a validation outcome, not a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaPayload {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub nacimiento: Option<String>,
    pub dni: Option<i64>,
}

/// Validated persona fields ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPersona {
    pub nombre: String,
    pub apellido: String,
    pub nacimiento: NaiveDate,
    pub dni: i64,
}

impl NewPersona {
    /// Validate a raw payload.
    ///
    /// Any missing or empty field fails with one message naming every
    /// absent field. A `dni` of zero counts as absent. The birth date
    /// must be an ISO `YYYY-MM-DD` string.
    pub fn new(payload: PersonaPayload) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();

        let nombre = match payload.nombre {
            Some(s) if !s.is_empty() => Some(s),
            _ => {
                missing.push("nombre");
                None
            }
        };
        let apellido = match payload.apellido {
            Some(s) if !s.is_empty() => Some(s),
            _ => {
                missing.push("apellido");
                None
            }
        };
        let nacimiento_raw = match payload.nacimiento {
            Some(s) if !s.is_empty() => Some(s),
            _ => {
                missing.push("nacimiento");
                None
            }
        };
        let dni = match payload.dni {
            Some(n) if n != 0 => Some(n),
            _ => {
                missing.push("dni");
                None
            }
        };

        match (nombre, apellido, nacimiento_raw, dni) {
            (Some(nombre), Some(apellido), Some(raw), Some(dni)) => {
                let nacimiento = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                    ValidationError::InvalidFormat {
                        field: "nacimiento",
                        reason: "expected an ISO date (YYYY-MM-DD)",
                    }
                })?;

                Ok(Self {
                    nombre,
                    apellido,
                    nacimiento,
                    dni,
                })
            }
            _ => Err(ValidationError::MissingFields { fields: missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> PersonaPayload {
        PersonaPayload {
            nombre: Some("Ana".to_owned()),
            apellido: Some("Diaz".to_owned()),
            nacimiento: Some("1990-01-01".to_owned()),
            dni: Some(12_345_678),
        }
    }

    #[test]
    fn complete_payload_validates() {
        let persona = NewPersona::new(full_payload()).unwrap();

        assert_eq!(persona.nombre, "Ana");
        assert_eq!(persona.apellido, "Diaz");
        assert_eq!(persona.nacimiento, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(persona.dni, 12_345_678);
    }

    #[test]
    fn absent_field_is_reported() {
        let payload = PersonaPayload {
            apellido: None,
            ..full_payload()
        };
        let err = NewPersona::new(payload).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::MissingFields { ref fields } if fields == &vec!["apellido"]
        ));
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let payload = PersonaPayload {
            nombre: Some(String::new()),
            ..full_payload()
        };
        let err = NewPersona::new(payload).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::MissingFields { ref fields } if fields == &vec!["nombre"]
        ));
    }

    #[test]
    fn zero_dni_counts_as_missing() {
        let payload = PersonaPayload {
            dni: Some(0),
            ..full_payload()
        };
        let err = NewPersona::new(payload).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::MissingFields { ref fields } if fields == &vec!["dni"]
        ));
    }

    #[test]
    fn every_missing_field_is_enumerated_together() {
        let payload = PersonaPayload {
            nombre: None,
            apellido: Some(String::new()),
            nacimiento: None,
            dni: None,
        };
        let err = NewPersona::new(payload).unwrap_err();

        assert_eq!(
            err.to_string(),
            "missing required fields: nombre, apellido, nacimiento, dni"
        );
    }

    #[test]
    fn malformed_date_is_invalid_format() {
        let payload = PersonaPayload {
            nacimiento: Some("01/01/1990".to_owned()),
            ..full_payload()
        };
        let err = NewPersona::new(payload).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::InvalidFormat { field: "nacimiento", .. }
        ));
    }

    #[test]
    fn impossible_date_is_invalid_format() {
        let payload = PersonaPayload {
            nacimiento: Some("1990-02-30".to_owned()),
            ..full_payload()
        };
        assert!(NewPersona::new(payload).is_err());
    }
}
