//! Shared application state injected into every handler.

use med_auth::TokenVerifier;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Process-wide resources, acquired once at startup and passed explicitly.
/// Cloning is cheap; the pool and verifier are shared handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub verifier: Arc<dyn TokenVerifier>,
}
