//! Repository for the `movies` table.

use cineteca_core::types::{new_movie_id, MovieId};
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, genre, synopsis, picture, created_at, updated_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie with a freshly generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (id, title, author, genre, synopsis, picture)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(new_movie_id())
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.genre)
            .bind(&input.synopsis)
            .bind(&input.picture)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by id.
    pub async fn find_by_id(pool: &PgPool, id: MovieId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: MovieId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                genre = COALESCE($4, genre),
                synopsis = COALESCE($5, synopsis),
                picture = COALESCE($6, picture),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.genre)
            .bind(&input.synopsis)
            .bind(&input.picture)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: MovieId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
