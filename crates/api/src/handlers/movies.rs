//! Handlers for the `/movies` resource.
//!
//! Thin wrappers: parse and validate the request, call the [`Reconciler`],
//! wrap the result in the `{ "data": ... }` envelope.
//!
//! [`Reconciler`]: cinedex_core::reconcile::Reconciler

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::movie::{MovieInput, Rating};

use crate::error::AppResult;
use crate::query::{CategorySearchParams, ImdbIdParams, SearchParams, TitleParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /movies/search/{title}
///
/// Resolve one movie by (partial) title, falling back to the provider.
pub async fn lookup(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<impl IntoResponse> {
    let movie = state.reconciler.lookup_by_title(&title).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// GET /movies/search?query=
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let results = state.reconciler.search_by_query(&params.query).await?;
    Ok(Json(DataResponse { data: results }))
}

/// GET /movies/searchByCategory?query=&category=
pub async fn search_by_category(
    State(state): State<AppState>,
    params: Result<Query<CategorySearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let movies = state
        .reconciler
        .search_by_category(&params.query, &params.category)
        .await?;
    Ok(Json(DataResponse { data: movies }))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /movies/movie
///
/// Create a catalog-local movie with a generated `ttt` ID.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let movie = state.reconciler.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// PUT /movies?imdbID=
pub async fn update(
    State(state): State<AppState>,
    params: Result<Query<ImdbIdParams>, QueryRejection>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let imdb_id = params.validated()?;
    let Json(input) = payload?;
    let movie = state.reconciler.update_by_external_id(imdb_id, input).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /movies?imdbID=
///
/// Soft delete. The record stays stored and hides the title from reads.
pub async fn delete(
    State(state): State<AppState>,
    params: Result<Query<ImdbIdParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let imdb_id = params.validated()?;
    let movie = state.reconciler.delete_by_external_id(imdb_id).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// PATCH /movies?title=
///
/// Re-enable a soft-deleted movie.
pub async fn enable(
    State(state): State<AppState>,
    params: Result<Query<TitleParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let movie = state.reconciler.enable(&params.title).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// POST /movies/rating?title=
///
/// Body: `[{"Source": "...", "Value": "..."}, ...]`.
pub async fn add_rating(
    State(state): State<AppState>,
    params: Result<Query<TitleParams>, QueryRejection>,
    payload: Result<Json<Vec<Rating>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let Json(ratings) = payload?;
    let movie = state.reconciler.append_rating(&params.title, ratings).await?;
    Ok(Json(DataResponse { data: movie }))
}
