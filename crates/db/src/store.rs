//! The movie store seam.
//!
//! Handlers only see [`MovieStore`]. [`PgMovieStore`] delegates to
//! [`MovieRepo`]; [`MemoryMovieStore`] keeps documents in process and backs
//! the API tests.

use async_trait::async_trait;
use chrono::Utc;
use cineteca_core::types::{new_movie_id, MovieId};
use tokio::sync::RwLock;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::repositories::MovieRepo;
use crate::DbPool;

/// Storage operations for movie documents.
///
/// Each method is a single store operation; nothing spans more than one
/// document.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Check the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error>;

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, sqlx::Error>;

    async fn create(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error>;

    /// Returns `None` when no movie has this id.
    async fn update(&self, id: MovieId, input: &UpdateMovie)
        -> Result<Option<Movie>, sqlx::Error>;

    /// Returns `true` if a movie was removed.
    async fn delete(&self, id: MovieId) -> Result<bool, sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`MovieStore`] over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        MovieRepo::create(&self.pool, input).await
    }

    async fn update(
        &self,
        id: MovieId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: MovieId) -> Result<bool, sqlx::Error> {
        MovieRepo::delete(&self.pool, id).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// [`MovieStore`] holding documents in insertion order behind a lock.
#[derive(Default)]
pub struct MemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, sqlx::Error> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let now = Utc::now();
        let movie = Movie {
            id: new_movie_id(),
            title: input.title.clone(),
            author: input.author.clone(),
            genre: input.genre.clone(),
            synopsis: input.synopsis.clone(),
            picture: input.picture.clone(),
            created_at: now,
            updated_at: now,
        };
        self.movies.write().await.push(movie.clone());
        Ok(movie)
    }

    async fn update(
        &self,
        id: MovieId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut movies = self.movies.write().await;
        let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            movie.title = title.clone();
        }
        if let Some(author) = &input.author {
            movie.author = author.clone();
        }
        if let Some(genre) = &input.genre {
            movie.genre = genre.clone();
        }
        if let Some(synopsis) = &input.synopsis {
            movie.synopsis = Some(synopsis.clone());
        }
        if let Some(picture) = &input.picture {
            movie.picture = Some(picture.clone());
        }
        movie.updated_at = Utc::now();

        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: MovieId) -> Result<bool, sqlx::Error> {
        let mut movies = self.movies.write().await;
        let before = movies.len();
        movies.retain(|m| m.id != id);
        Ok(movies.len() < before)
    }
}
