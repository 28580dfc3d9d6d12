use crate::api::MovieApi;

/// Shared state for page handlers.
#[derive(Clone)]
pub struct WebState {
    /// Client for the movie API.
    pub api: MovieApi,
}
