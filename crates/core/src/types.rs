/// Movie identifiers are UUIDv7, generated when the record is inserted.
pub type MovieId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh movie identifier.
///
/// UUIDv7 keeps identifiers roughly ordered by creation time, which is the
/// order the list endpoint returns.
pub fn new_movie_id() -> MovieId {
    uuid::Uuid::now_v7()
}

/// Parse a path segment into a [`MovieId`].
pub fn parse_movie_id(raw: &str) -> Result<MovieId, crate::error::CoreError> {
    raw.parse()
        .map_err(|_| crate::error::CoreError::Validation(format!("Invalid movie id '{raw}'")))
}
