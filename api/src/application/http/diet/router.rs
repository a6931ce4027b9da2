use super::handlers::generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan};
use super::handlers::get_meals::{__path_get_meals, get_meals};
use super::handlers::get_winter_vitamin_guide::{
    __path_get_winter_vitamin_guide, get_winter_vitamin_guide,
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_meals))]
pub struct MealsApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_winter_vitamin_guide))]
pub struct WinterGuideApiDoc;

#[derive(OpenApi)]
#[openapi(paths(generate_meal_plan))]
pub struct MealPlanApiDoc;

pub fn diet_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/meals", state.args.server.root_path),
            get(get_meals),
        )
        .route(
            &format!("{}/api/winter-vitamin-guide", state.args.server.root_path),
            get(get_winter_vitamin_guide),
        )
        .route(
            &format!("{}/api/meal-plan", state.args.server.root_path),
            post(generate_meal_plan),
        )
}
