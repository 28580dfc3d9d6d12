pub mod movie;

use crate::error::AppError;

/// Fallback for any path or method no route matched.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
