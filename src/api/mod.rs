//! HTTP layer: the axum router and JSON handlers over [`AppState`].
//!
//! The router is built separately from the listener so integration tests
//! can drive it in-process.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/load", post(handlers::load))
        .route("/status", get(handlers::status))
        .route("/dataset", get(handlers::dataset))
        .route("/dataset/normalize", get(handlers::normalized_dataset))
        .route("/dataset/{line_number}", get(handlers::line))
        .with_state(state)
}
