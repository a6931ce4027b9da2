use std::collections::BTreeMap;

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    summary = "Service index",
    description = "Service name, version and the main endpoints.",
    responses(
        (status = 200, body = IndexResponse)
    ),
)]
pub async fn get_index(State(state): State<AppState>) -> Response<IndexResponse> {
    let root_path = &state.args.server.root_path;

    let endpoints = [
        ("/api/chat", "AI chat about the carnivore diet"),
        ("/api/generate-image", "Generate health and food images"),
        ("/api/meal-plan", "Multi-day carnivore meal plan"),
        ("/api/meals", "Carnivore meal suggestions"),
        ("/api/nutrients/{food_name}", "Nutrient information for a food"),
        ("/api/winter-vitamin-guide", "Winter vitamin D3 and K2 protocol"),
    ]
    .into_iter()
    .map(|(path, description)| (format!("{root_path}{path}"), description.to_string()))
    .collect();

    Response::OK(IndexResponse {
        name: "CarnivoreAI Coach".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}
