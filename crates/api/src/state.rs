use std::sync::Arc;

use cineteca_db::MovieStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Movie document store (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn MovieStore>,
}
