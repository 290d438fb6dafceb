//! padron-server: HTTP service for persona records
//!
//! Exposes CRUD endpoints over the `persona` table and a connectivity
//! probe for the backing PostgreSQL store.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use state::AppState;
