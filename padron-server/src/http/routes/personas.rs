//! Persona endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Persona, PersonaRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidPersonaId;
use crate::models::{NewPersona, PersonaPayload};
use crate::state::AppState;

/// Persona response
#[derive(Serialize)]
pub struct PersonaResponse {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub nacimiento: String,
    pub dni: i64,
}

impl From<Persona> for PersonaResponse {
    fn from(p: Persona) -> Self {
        Self {
            id: p.id,
            nombre: p.nombre,
            apellido: p.apellido,
            nacimiento: p.nacimiento.format("%Y-%m-%d").to_string(),
            dni: p.dni,
        }
    }
}

/// Response envelope for create and update
#[derive(Serialize)]
pub struct MutationResponse {
    pub message: String,
    pub data: PersonaResponse,
}

/// GET /persona - list all personas, most recent id first
async fn list_personas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonaResponse>>, ApiError> {
    let personas = PersonaRepo::new(state.pool()).list().await?;

    Ok(Json(personas.into_iter().map(PersonaResponse::from).collect()))
}

/// POST /persona - create a new persona
async fn create_persona(
    State(state): State<AppState>,
    Json(payload): Json<PersonaPayload>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let persona = NewPersona::new(payload)?;
    let created = PersonaRepo::new(state.pool()).create(persona).await?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "persona created".to_owned(),
            data: created.into(),
        }),
    ))
}

/// GET /persona/{id} - get a single persona
async fn get_persona(
    State(state): State<AppState>,
    ValidPersonaId(id): ValidPersonaId,
) -> Result<Json<PersonaResponse>, ApiError> {
    let persona = PersonaRepo::new(state.pool()).get(id.get()).await?;
    Ok(Json(persona.into()))
}

/// PUT /persona/{id} - overwrite all four fields on one persona
async fn update_persona(
    State(state): State<AppState>,
    ValidPersonaId(id): ValidPersonaId,
    Json(payload): Json<PersonaPayload>,
) -> Result<Json<MutationResponse>, ApiError> {
    let persona = NewPersona::new(payload)?;
    let updated = PersonaRepo::new(state.pool()).update(id.get(), persona).await?;

    Ok(Json(MutationResponse {
        message: format!("persona {} updated", id),
        data: updated.into(),
    }))
}

/// Persona routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/persona", get(list_personas).post(create_persona))
        .route("/persona/{id}", get(get_persona).put(update_persona))
}
