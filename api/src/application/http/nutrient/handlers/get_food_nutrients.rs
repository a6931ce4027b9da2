use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use carnivore_core::domain::nutrient::entities::FoodNutrients;
use carnivore_core::domain::nutrient::ports::NutrientService;

#[utoipa::path(
    get,
    path = "/{food_name}",
    tag = "nutrient",
    summary = "Get food nutrients",
    description = "Nutrient values and health benefits of a food. The name is matched case-insensitively with spaces read as underscores.",
    params(
        ("food_name" = String, Path, description = "Food name, e.g. ribeye steak"),
    ),
    responses(
        (status = 200, body = FoodNutrients),
        (status = 404, description = "Food not found in database")
    ),
)]
pub async fn get_food_nutrients(
    Path(food_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<FoodNutrients>, ApiError> {
    let nutrients = state
        .service
        .get_food_nutrients(&food_name)
        .map_err(ApiError::from)?;

    Ok(Response::OK(nutrients))
}
