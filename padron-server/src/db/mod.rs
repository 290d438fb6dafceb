//! Database access layer: connection pool and repositories

pub mod pool;
pub mod repos;

pub use pool::{check_connectivity, create_pool, create_pool_with_options};
pub use repos::{DbError, PersonaRepo};
