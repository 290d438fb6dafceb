//! Database configuration for the padron service.
//!
//! One consolidated schema covers every component that talks to the
//! relational store:
//!
//!   PG_HOST        hostname of the PostgreSQL server
//!   PG_PORT        port (default: 5432)
//!   PG_USER        role to connect as
//!   PG_PASSWORD    password for that role
//!   PG_DATABASE    database name
//!
//! A `DATABASE_URL` set in the environment takes precedence over the
//! five-part form; that resolution happens in the binary (see
//! padron-cli's `serve` command).

use std::env;

use sqlx::postgres::PgConnectOptions;

use crate::error::ConfigError;

/// Default PostgreSQL port when PG_PORT is unset.
const DEFAULT_PG_PORT: u16 = 5432;

/// Connection parameters for the relational store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Load config from the process environment.
    ///
    /// Fails with an error naming the first missing or unusable variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load config through an arbitrary variable lookup.
    ///
    /// Empty values are treated as absent, matching how operators unset
    /// variables in container environments (`PG_PASSWORD=`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ConfigError::missing(name)),
            }
        };

        let port = match lookup("PG_PORT") {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid("PG_PORT", raw, "not a valid port number"))?,
            _ => DEFAULT_PG_PORT,
        };

        Ok(Self {
            host: required("PG_HOST")?,
            port,
            user: required("PG_USER")?,
            password: required("PG_PASSWORD")?,
            database: required("PG_DATABASE")?,
        })
    }

    /// Build sqlx connect options from the parts.
    ///
    /// Field-by-field construction keeps credentials out of any URL
    /// formatting path.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}
