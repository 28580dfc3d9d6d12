//! Detail page for a single movie.

use cineteca_core::catalog::picture_or_placeholder;

use crate::api::{Movie, MovieApi, MovieApiError};
use crate::html::{document, edit_path, escape};

/// Message shown for any failed fetch, whatever the cause.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch movie";

/// Render state of the detail page. Exactly one applies at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Error(String),
    /// The API answered OK with no movie.
    Missing,
    Loaded(Movie),
}

impl DetailState {
    /// Map a fetch outcome to the state it renders.
    ///
    /// Every error, non-OK status or transport failure alike, collapses to
    /// [`FETCH_ERROR_MESSAGE`]. The cause is only logged.
    pub fn from_fetch(result: Result<Option<Movie>, MovieApiError>) -> Self {
        match result {
            Ok(Some(movie)) => DetailState::Loaded(movie),
            Ok(None) => DetailState::Missing,
            Err(_) => DetailState::Error(FETCH_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Local state of the detail page.
#[derive(Debug)]
pub struct DetailPage {
    pub id: String,
    pub state: DetailState,
}

impl DetailPage {
    pub fn new(id: String) -> Self {
        Self {
            id,
            state: DetailState::Loading,
        }
    }

    pub async fn load(&mut self, api: &MovieApi) {
        let result = api.get(&self.id).await;
        if let Err(e) = &result {
            tracing::warn!(movie_id = %self.id, error = %e, "Failed to fetch movie");
        }
        self.state = DetailState::from_fetch(result);
    }

    pub fn render(&self) -> String {
        match &self.state {
            DetailState::Loading => document("Movie", "<p>Loading...</p>"),
            DetailState::Error(message) => {
                document("Movie", &format!("<p>Error: {}</p>", escape(message)))
            }
            DetailState::Missing => document("Movie", "<p>Movie not found.</p>"),
            DetailState::Loaded(movie) => document(&movie.title, &loaded(movie)),
        }
    }
}

fn loaded(movie: &Movie) -> String {
    let mut body = format!(
        r#"<h1>{title}</h1>
<img src="{picture}" alt="{title}">
<p><strong>Author:</strong> {author}</p>
<p><strong>Genre:</strong> {genre}</p>
"#,
        title = escape(&movie.title),
        picture = escape(picture_or_placeholder(movie.picture.as_deref())),
        author = escape(&movie.author),
        genre = escape(&movie.genre),
    );

    if let Some(synopsis) = movie.synopsis.as_deref().filter(|s| !s.is_empty()) {
        body.push_str(&format!(
            "<p><strong>Synopsis:</strong> {}</p>\n",
            escape(synopsis)
        ));
    }

    body.push_str(&format!(
        "<a href=\"{}\">Edit movie</a>\n",
        edit_path(&movie.id)
    ));
    body
}
