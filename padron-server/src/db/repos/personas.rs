//! Persona repository
//!
//! Four operations over the `persona` table: list (id desc), get by id,
//! insert, full-row update. The store assigns `id` on insert; every other
//! column is caller-supplied.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::models::NewPersona;

/// Persona record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Persona {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub nacimiento: NaiveDate,
    pub dni: i64,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Persona repository
pub struct PersonaRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PersonaRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all personas, most recently created first.
    pub async fn list(&self) -> Result<Vec<Persona>, DbError> {
        let personas = sqlx::query_as::<_, Persona>(
            r#"
            SELECT id, nombre, apellido, nacimiento, dni
            FROM persona
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(personas)
    }

    /// Get a single persona by id.
    pub async fn get(&self, id: i32) -> Result<Persona, DbError> {
        let persona = sqlx::query_as::<_, Persona>(
            r#"
            SELECT id, nombre, apellido, nacimiento, dni
            FROM persona
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "persona",
            id: id.to_string(),
        })?;

        Ok(persona)
    }

    /// Insert a new persona; the store assigns the id.
    pub async fn create(&self, persona: NewPersona) -> Result<Persona, DbError> {
        let created = sqlx::query_as::<_, Persona>(
            r#"
            INSERT INTO persona (nombre, apellido, nacimiento, dni)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre, apellido, nacimiento, dni
            "#,
        )
        .bind(&persona.nombre)
        .bind(&persona.apellido)
        .bind(persona.nacimiento)
        .bind(persona.dni)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Overwrite all four business fields on the row matching `id`.
    ///
    /// Single statement with RETURNING, so the matched/not-matched
    /// decision and the returned row come from one round trip.
    pub async fn update(&self, id: i32, persona: NewPersona) -> Result<Persona, DbError> {
        let updated = sqlx::query_as::<_, Persona>(
            r#"
            UPDATE persona
            SET nombre = $1, apellido = $2, nacimiento = $3, dni = $4
            WHERE id = $5
            RETURNING id, nombre, apellido, nacimiento, dni
            "#,
        )
        .bind(&persona.nombre)
        .bind(&persona.apellido)
        .bind(persona.nacimiento)
        .bind(persona.dni)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "persona",
            id: id.to_string(),
        })?;

        Ok(updated)
    }
}
