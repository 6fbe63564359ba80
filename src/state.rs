//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Injected into every handler at wiring time; tests build one over an in-memory pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState { pool }
    }
}
