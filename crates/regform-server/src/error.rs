use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use regform::UnknownField;

use crate::pages;

/// Request failures that are not form validation errors.
///
/// Validation failures are ordinary form renders; these are for requests
/// the form could never have produced, and for the server's own failures.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request, e.g. a change event for an input that does not exist
    BadRequest(String),
    /// No route for the requested path
    NotFound(String),
    /// Server-side failure; details are logged, never sent to the client
    Internal(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("bad request: {}", msg);
                ("Bad Request", msg)
            }
            AppError::NotFound(path) => ("Page Not Found", format!("Route '{}' not found", path)),
            AppError::Internal(err) => {
                tracing::error!("internal error: {:#}", err);
                ("Server Error", "Something went wrong.".to_string())
            }
        };
        let markup = pages::error_page(status, title, &message);
        (status, Html(markup.into_string())).into_response()
    }
}

impl From<UnknownField> for AppError {
    fn from(err: UnknownField) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
