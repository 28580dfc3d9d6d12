//! Page router shared by the binary and the integration tests.

use axum::routing::get;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers;
use crate::state::WebState;

/// Build the page [`Router`].
///
/// ```text
/// GET  /              -> catalog
/// GET  /create        -> create_form
/// POST /create        -> create_submit
/// GET  /edit/{id}     -> edit_form
/// POST /edit/{id}     -> edit_submit
/// GET  /{id}          -> detail
/// ```
pub fn build_web_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::catalog))
        .route(
            "/create",
            get(handlers::create_form).post(handlers::create_submit),
        )
        .route(
            "/edit/{id}",
            get(handlers::edit_form).post(handlers::edit_submit),
        )
        .route("/{id}", get(handlers::detail))
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
