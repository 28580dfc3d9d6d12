//! Page handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::api::MovieForm;
use crate::html::{detail_path, document, escape};
use crate::pages::catalog::{CatalogPage, CatalogQuery};
use crate::pages::detail::{DetailPage, DetailState};
use crate::pages::form::{FormMode, FormPage, Submission};
use crate::state::WebState;

/// GET /
pub async fn catalog(
    State(state): State<WebState>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    let mut page = CatalogPage::new(query.into());
    page.load(&state.api).await;
    Html(page.render())
}

/// GET /{id}
pub async fn detail(State(state): State<WebState>, Path(id): Path<String>) -> Html<String> {
    let mut page = DetailPage::new(id);
    page.load(&state.api).await;
    Html(page.render())
}

/// GET /create
pub async fn create_form() -> Html<String> {
    Html(FormPage::new(FormMode::Create, MovieForm::default()).render())
}

/// POST /create
pub async fn create_submit(
    State(state): State<WebState>,
    Form(form): Form<MovieForm>,
) -> Response {
    let page = FormPage::new(FormMode::Create, form);
    respond(page.submit(&state.api).await)
}

/// GET /edit/{id}
pub async fn edit_form(State(state): State<WebState>, Path(id): Path<String>) -> Html<String> {
    let mut detail = DetailPage::new(id.clone());
    detail.load(&state.api).await;

    match detail.state {
        DetailState::Loaded(movie) => {
            Html(FormPage::new(FormMode::Edit { id }, MovieForm::from(&movie)).render())
        }
        DetailState::Error(message) => Html(document(
            "Edit Movie",
            &format!("<p>Error: {}</p>", escape(&message)),
        )),
        DetailState::Missing | DetailState::Loading => {
            Html(document("Edit Movie", "<p>Movie not found.</p>"))
        }
    }
}

/// POST /edit/{id}
pub async fn edit_submit(
    State(state): State<WebState>,
    Path(id): Path<String>,
    Form(form): Form<MovieForm>,
) -> Response {
    let page = FormPage::new(FormMode::Edit { id }, form);
    respond(page.submit(&state.api).await)
}

/// Fallback for paths no page handles.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(document("Not found", "<p>Page not found.</p>")),
    )
}

fn respond(submission: Submission) -> Response {
    match submission {
        Submission::Redirect(id) => Redirect::to(&detail_path(&id)).into_response(),
        Submission::Retry(page) => Html(page.render()).into_response(),
    }
}
