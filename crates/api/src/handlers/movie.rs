//! Handlers for the `/movies` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cineteca_core::error::CoreError;
use cineteca_core::types::{parse_movie_id, MovieId};
use cineteca_db::models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: MovieId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// GET /api/movies/list
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.store.list().await?;
    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Movie>> {
    let id = parse_movie_id(&raw_id)?;
    let movie = state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// POST /api/movies/create
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let Json(input) = payload?;
    let movie = state.store.create(&input).await?;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateMovie>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let id = parse_movie_id(&raw_id)?;
    let Json(input) = payload?;
    let movie = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(movie_id = %id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_movie_id(&raw_id)?;
    if state.store.delete(id).await? {
        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
