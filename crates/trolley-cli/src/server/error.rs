//! Mapping of failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use thiserror::Error;
use trolley_core::ListError;

/// Error returned by request handlers. The response body is the plain error
/// text.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::List(ListError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,
            AppError::List(ListError::ItemNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::List(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("{self}");
        } else {
            warn!("{self}");
        }

        (status, self.to_string()).into_response()
    }
}
