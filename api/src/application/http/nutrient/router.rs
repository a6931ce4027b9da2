use super::handlers::get_food_nutrients::{__path_get_food_nutrients, get_food_nutrients};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_food_nutrients))]
pub struct NutrientApiDoc;

pub fn nutrient_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/nutrients/{{food_name}}", state.args.server.root_path),
        get(get_food_nutrients),
    )
}
