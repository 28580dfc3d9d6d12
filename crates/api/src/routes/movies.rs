//! Route definitions for the `/movies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /list        -> list
/// POST   /create      -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(movie::list))
        .route("/create", post(movie::create))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
}
