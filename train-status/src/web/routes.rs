//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::status::StatusResult;

use super::dto::GetStatusRequest;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rpc/GetStatus", post(get_status))
        .route("/trains/:number/status", get(train_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// `GetStatus` RPC. Always answers with a well-formed result.
async fn get_status(
    State(state): State<AppState>,
    Json(req): Json<GetStatusRequest>,
) -> Json<StatusResult> {
    Json(state.status.get_status(&req.train_number).await)
}

/// Same lookup, addressed by path.
async fn train_status(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Json<StatusResult> {
    Json(state.status.get_status(&number).await)
}
