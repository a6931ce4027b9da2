use crate::application::http::diet::validators::MealPlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use carnivore_core::domain::diet::entities::MealPlan;
use carnivore_core::domain::diet::ports::DietService;

#[utoipa::path(
    post,
    path = "",
    tag = "diet",
    summary = "Generate a meal plan",
    description = "Builds a day-by-day carnivore meal plan. `days` defaults to 7 and must be between 1 and 30.",
    responses(
        (status = 200, body = MealPlan),
        (status = 400, description = "days out of range")
    ),
    request_body = MealPlanValidator
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MealPlanValidator>,
) -> Result<Response<MealPlan>, ApiError> {
    let plan = state
        .service
        .meal_plan(payload.days)
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
