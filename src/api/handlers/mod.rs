pub mod health;
pub mod matches;
pub mod metrics;

use axum::http::Uri;

use crate::errors::AppError;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
