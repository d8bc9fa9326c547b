pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::analysis::handlers::handle_analyze_resume;
use crate::state::AppState;

/// GET /
/// Liveness message kept stable for clients that probe the root path.
async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "AI Resume Analyzer API is running!" }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        .route("/ui", get(ui::ui_handler))
        .route("/analyze-resume", post(handle_analyze_resume))
        .with_state(state)
}
