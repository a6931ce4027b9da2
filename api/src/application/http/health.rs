use axum::{Router, routing::get};
use serde::Serialize;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

async fn live() -> Response<LivenessResponse> {
    Response::OK(LivenessResponse { status: "ok" })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health/live", root_path), get(live))
}
