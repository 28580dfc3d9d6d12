//! Movie entity model and DTOs.

use cineteca_core::catalog::CatalogItem;
use cineteca_core::types::{MovieId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table.
///
/// The identifier is exposed as `_id` on the wire; absent optional fields
/// are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: MovieId,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
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

/// DTO for creating a new movie.
///
/// `title`, `author` and `genre` must be present; emptiness is not checked
/// here, the forms do that.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub synopsis: Option<String>,
    pub picture: Option<String>,
}

/// DTO for updating an existing movie. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub synopsis: Option<String>,
    pub picture: Option<String>,
}
