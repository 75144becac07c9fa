use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::data::loader::LoadError;

// ---------------------------------------------------------------------------
// HTTP error taxonomy
// ---------------------------------------------------------------------------

/// Failures surfaced to clients as non-200 responses.
///
/// An out-of-range line number is deliberately NOT in here: the wire
/// contract reports it as a normal 200 payload carrying an `error` field,
/// so handlers model it as data (see `LineResponse`).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The dataset file was absent at load time → 404.
    #[error("Dataset file not found")]
    FileNotFound,

    /// A read endpoint was hit before a successful load → 400.
    #[error("Dataset not loaded. Please load dataset first using /load endpoint")]
    NotLoaded,

    /// Unexpected I/O failure while reading the dataset file → 500.
    #[error("failed to read dataset file: {0}")]
    Io(io::Error),
}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound(_) => ApiError::FileNotFound,
            LoadError::Io(e) => ApiError::Io(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FileNotFound => StatusCode::NOT_FOUND,
            ApiError::NotLoaded => StatusCode::BAD_REQUEST,
            ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
