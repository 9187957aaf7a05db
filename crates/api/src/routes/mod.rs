pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                  update, delete, enable
///     /search              free-text search
///     /search/{title}      title lookup
///     /searchByCategory    category search
///     /movie               create
///     /rating              append ratings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
