use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::data::loader::load_lines;
use crate::data::model::TextDataset;
use crate::data::normalizer::NORMALIZATION_STEPS;
use crate::state::AppState;

use super::error::ApiError;

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub message: &'static str,
    pub total_lines: usize,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub is_loaded: bool,
    pub total_lines: usize,
}

#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    pub total_lines: usize,
    pub data: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NormalizedResponse {
    pub total_lines: usize,
    pub original_data: Vec<String>,
    pub normalized_data: Vec<String>,
    pub normalization_steps: [&'static str; 4],
}

/// `GET /dataset/{n}` body: either the line pair or the out-of-range marker.
/// Both serialize under HTTP 200; out of range is a result value here, not
/// a failure (unlike the not-loaded case, which is a 400).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LineResponse {
    Line {
        line_number: i64,
        original_content: String,
        normalized_content: String,
    },
    OutOfRange {
        error: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /` – welcome message plus a map of the main endpoints.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Sample Text Dataset API",
        "endpoints": {
            "/load": "Load the dataset",
            "/dataset": "View the current dataset",
            "/dataset/normalize": "View normalized dataset",
            "/status": "Check if dataset is loaded"
        }
    }))
}

/// `POST /load` – read the source file and publish a fresh dataset.
///
/// On failure the previously published dataset (if any) is left untouched;
/// the loader fails before anything is swapped in.
pub async fn load(State(state): State<Arc<AppState>>) -> Result<Json<LoadResponse>, ApiError> {
    let lines = load_lines(&state.source_path).map_err(|e| {
        log::error!("load failed: {e}");
        e
    })?;

    let total_lines = state.publish(TextDataset::from_lines(lines));
    log::info!(
        "loaded {total_lines} lines from {}",
        state.source_path.display()
    );

    Ok(Json(LoadResponse {
        message: "Dataset loaded successfully",
        total_lines,
    }))
}

/// `GET /status`
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (is_loaded, total_lines) = state.status();
    Json(StatusResponse {
        is_loaded,
        total_lines,
    })
}

/// `GET /dataset` – the original lines.
pub async fn dataset(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DatasetResponse>, ApiError> {
    let ds = state.dataset().ok_or(ApiError::NotLoaded)?;
    Ok(Json(DatasetResponse {
        total_lines: ds.len(),
        data: ds.original_lines.clone(),
    }))
}

/// `GET /dataset/normalize` – both views plus the static step descriptions.
pub async fn normalized_dataset(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NormalizedResponse>, ApiError> {
    let ds = state.dataset().ok_or(ApiError::NotLoaded)?;
    Ok(Json(NormalizedResponse {
        total_lines: ds.len(),
        original_data: ds.original_lines.clone(),
        normalized_data: ds.normalized_lines.clone(),
        normalization_steps: NORMALIZATION_STEPS,
    }))
}

/// `GET /dataset/{line_number}` – one line, 1-based.
///
/// `line_number` parses as `i64` so negative or huge values take the
/// out-of-range path instead of failing extraction.
pub async fn line(
    State(state): State<Arc<AppState>>,
    Path(line_number): Path<i64>,
) -> Result<Json<LineResponse>, ApiError> {
    let ds = state.dataset().ok_or(ApiError::NotLoaded)?;

    let body = match ds.line(line_number) {
        Some((original, normalized)) => LineResponse::Line {
            line_number,
            original_content: original.to_string(),
            normalized_content: normalized.to_string(),
        },
        None => LineResponse::OutOfRange {
            error: "Line number out of range",
        },
    };
    Ok(Json(body))
}
