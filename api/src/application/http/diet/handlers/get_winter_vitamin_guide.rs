use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use carnivore_core::domain::diet::entities::WinterVitaminGuide;
use carnivore_core::domain::diet::ports::DietService;

#[utoipa::path(
    get,
    path = "",
    tag = "diet",
    summary = "Get winter vitamin guide",
    description = "Vitamin D3 and K2 protocol for the winter months with supplement and food recommendations.",
    responses(
        (status = 200, body = WinterVitaminGuide)
    ),
)]
pub async fn get_winter_vitamin_guide(State(state): State<AppState>) -> Response<WinterVitaminGuide> {
    Response::OK(state.service.winter_vitamin_guide())
}
