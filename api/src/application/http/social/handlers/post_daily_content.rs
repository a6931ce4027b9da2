use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::social::validators::DailyPostQuery;
use axum::extract::{Query, State};
use carnivore_core::domain::social::entities::DailyPost;
use carnivore_core::domain::social::ports::SocialService;
use carnivore_core::domain::social::value_objects::DailyPostInput;

#[utoipa::path(
    post,
    path = "/daily-post",
    tag = "social",
    summary = "Publish the post of the day",
    description = "Writes the caption for the weekday theme, generates its image and publishes both to Instagram. The publish result is reported in `outcome`; a post without an image is skipped.",
    params(DailyPostQuery),
    responses(
        (status = 200, body = DailyPost),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 502, description = "Caption generation failed")
    ),
    security(("bearer" = []))
)]
pub async fn post_daily_content(
    Query(query): Query<DailyPostQuery>,
    State(state): State<AppState>,
) -> Result<Response<DailyPost>, ApiError> {
    let input = DailyPostInput::from_weekday_name(query.weekday.as_deref()).map_err(ApiError::from)?;

    let post = state
        .service
        .post_daily_content(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(post))
}
