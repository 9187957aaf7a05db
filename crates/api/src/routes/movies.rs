//! Route definitions for the `/movies` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// PUT    /                   -> update      (?imdbID=)
/// DELETE /                   -> delete      (?imdbID=)
/// PATCH  /                   -> enable      (?title=)
/// GET    /search             -> search      (?query=)
/// GET    /search/{title}     -> lookup
/// GET    /searchByCategory   -> search_by_category (?query=&category=)
/// POST   /movie              -> create
/// POST   /rating             -> add_rating  (?title=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            put(movies::update)
                .delete(movies::delete)
                .patch(movies::enable),
        )
        .route("/search", get(movies::search))
        .route("/search/{title}", get(movies::lookup))
        .route("/searchByCategory", get(movies::search_by_category))
        .route("/movie", post(movies::create))
        .route("/rating", post(movies::add_rating))
}
