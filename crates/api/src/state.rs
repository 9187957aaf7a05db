use std::sync::Arc;

use cinedex_core::reconcile::Reconciler;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// The catalog engine.
    pub reconciler: Arc<Reconciler>,
    /// Database pool, when the catalog is Postgres-backed. Used by `/health`.
    pub pool: Option<cinedex_db::DbPool>,
}
