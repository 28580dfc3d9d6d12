//! REST client for the movie API.
//!
//! Wraps the `/api/movies` endpoints using [`reqwest`]. The UI always talks
//! to [`API_BASE_URL`]; tests point a client at a mock server instead.

use cineteca_core::catalog::CatalogItem;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Origin of the movie API the UI talks to.
pub const API_BASE_URL: &str = "http://localhost:5000";

/// A movie as the API returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl CatalogItem for Movie {
    fn title(&self) -> &str {
        &self.title
    }

    fn genre(&self) -> &str {
        &self.genre
    }

    fn author(&self) -> &str {
        &self.author
    }
}

/// The create/edit form fields.
///
/// Deserialized from the submitted form and sent as the JSON body of create
/// and update requests. Empty optional fields are sent as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MovieForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
    pub synopsis: String,
    pub picture: String,
}

impl From<&Movie> for MovieForm {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            author: movie.author.clone(),
            genre: movie.genre.clone(),
            synopsis: movie.synopsis.clone().unwrap_or_default(),
            picture: movie.picture.clone().unwrap_or_default(),
        }
    }
}

/// Errors from the movie API client.
#[derive(Debug, thiserror::Error)]
pub enum MovieApiError {
    /// The configured base URL cannot be used.
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The HTTP request itself failed (network, DNS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Movie API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for the movie API.
#[derive(Debug, Clone)]
pub struct MovieApi {
    client: reqwest::Client,
    api_url: reqwest::Url,
}

impl MovieApi {
    /// Create a client for the API at `api_url`, e.g. `http://localhost:5000`.
    pub fn new(api_url: &str) -> Result<Self, MovieApiError> {
        let api_url = reqwest::Url::parse(api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| MovieApiError::InvalidBaseUrl(api_url.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_url,
        })
    }

    /// Fetch every movie.
    pub async fn list(&self) -> Result<Vec<Movie>, MovieApiError> {
        let response = self
            .client
            .get(self.endpoint(&["list"]))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch one movie. `Ok(None)` means the API answered with `null`.
    pub async fn get(&self, id: &str) -> Result<Option<Movie>, MovieApiError> {
        let response = self.client.get(self.endpoint(&[id])).send().await?;
        Self::parse_response(response).await
    }

    /// Submit a new movie and return the response body.
    ///
    /// The status code is not inspected: whatever JSON comes back is handed
    /// to the caller, which looks for the `_id` of the created movie.
    pub async fn create(&self, form: &MovieForm) -> Result<serde_json::Value, MovieApiError> {
        let response = self
            .client
            .post(self.endpoint(&["create"]))
            .json(form)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    /// Replace a movie's fields with the form contents.
    pub async fn update(&self, id: &str, form: &MovieForm) -> Result<Movie, MovieApiError> {
        let response = self
            .client
            .put(self.endpoint(&[id]))
            .json(form)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// `{api_url}/api/movies/{segments...}`, with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["api", "movies"])
                .extend(segments);
        }
        url
    }

    /// Turn a non-2xx response into [`MovieApiError::ApiError`], otherwise
    /// decode the JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MovieApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MovieApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn endpoint_appends_segments() {
        let api = MovieApi::new("http://localhost:5000").unwrap();
        assert_eq!(
            api.endpoint(&["list"]).as_str(),
            "http://localhost:5000/api/movies/list"
        );
    }

    #[test]
    fn endpoint_encodes_ids() {
        let api = MovieApi::new("http://localhost:5000/").unwrap();
        assert_eq!(
            api.endpoint(&["a b/c"]).as_str(),
            "http://localhost:5000/api/movies/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert_matches!(
            MovieApi::new("not a url"),
            Err(MovieApiError::InvalidBaseUrl(_))
        );
        assert_matches!(
            MovieApi::new("mailto:someone@example.com"),
            Err(MovieApiError::InvalidBaseUrl(_))
        );
    }

    #[test]
    fn movie_reads_underscore_id_and_ignores_extra_fields() {
        let json = serde_json::json!({
            "_id": "abc",
            "title": "Dune",
            "author": "X",
            "genre": "SciFi",
            "created_at": "2024-01-01T00:00:00Z"
        });
        let movie: Movie = serde_json::from_value(json).unwrap();
        assert_eq!(movie.id, "abc");
        assert_eq!(movie.synopsis, None);
    }

    #[test]
    fn form_requires_title_author_genre() {
        let form = MovieForm {
            title: "Dune".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(!fields.contains_key("title"));
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("genre"));
        assert!(!fields.contains_key("synopsis"));
    }
}
