use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Required table {0} does not exist")]
    MissingTable(String),

    #[error("Template error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

// Convert AppError to an HTML error page
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Database(_) | AppError::MissingTable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".into())
            }
            AppError::Render(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        tracing::error!(?self);
        match views::render_error_page(status, &error_message) {
            Ok(page) => (status, Html(page)).into_response(),
            Err(_) => (status, error_message).into_response(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
