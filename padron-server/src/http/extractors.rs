//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{PersonaId, ValidationError};

/// Extract and validate a persona id from the request path.
///
/// The one and only identifier extraction strategy: structured path
/// binding followed by the purely-numeric check in [`PersonaId`].
pub struct ValidPersonaId(pub PersonaId);

impl<S> FromRequestParts<S> for ValidPersonaId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = PersonaId::parse(&raw)?;
        Ok(Self(id))
    }
}
