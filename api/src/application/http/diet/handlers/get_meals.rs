use crate::application::http::diet::validators::GetMealsQuery;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use carnivore_core::domain::diet::entities::{MealPeriod, MealSuggestions};
use carnivore_core::domain::diet::ports::DietService;

#[utoipa::path(
    get,
    path = "",
    tag = "diet",
    summary = "Get meal suggestions",
    description = "Carnivore meal ideas for a meal period, or for the whole day when the period is missing or unknown.",
    params(GetMealsQuery),
    responses(
        (status = 200, body = MealSuggestions)
    ),
)]
pub async fn get_meals(
    Query(query): Query<GetMealsQuery>,
    State(state): State<AppState>,
) -> Response<MealSuggestions> {
    let period = query
        .period
        .as_deref()
        .map(MealPeriod::from)
        .unwrap_or_default();

    Response::OK(state.service.suggest_meals(period))
}
