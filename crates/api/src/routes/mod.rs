pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /movies/list          list all movies
/// /movies/create        create a movie
/// /movies/{id}          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
