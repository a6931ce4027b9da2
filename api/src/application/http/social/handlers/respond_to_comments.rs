use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use carnivore_core::domain::social::entities::CommentReplyReport;
use carnivore_core::domain::social::ports::SocialService;

#[utoipa::path(
    post,
    path = "/comment-replies",
    tag = "social",
    summary = "Reply to recent comments",
    description = "Replies to unanswered comments on the latest posts and reports how many replies were posted or failed.",
    responses(
        (status = 200, body = CommentReplyReport),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 503, description = "Instagram is not configured")
    ),
    security(("bearer" = []))
)]
pub async fn respond_to_comments(
    State(state): State<AppState>,
) -> Result<Response<CommentReplyReport>, ApiError> {
    let report = state
        .service
        .respond_to_comments()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
