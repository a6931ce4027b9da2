use crate::application::http::chat::validators::ChatValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use carnivore_core::domain::chat::ports::ChatService;
use carnivore_core::domain::chat::value_objects::ChatInput;
use carnivore_core::domain::response::entities::ChatReply;

const ANONYMOUS_USER: &str = "anonymous";

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Chat with the coach",
    description = "Answers a free-text question. Known topics are served from the built-in diet content, anything else is answered by the language model.",
    responses(
        (status = 200, body = ChatReply),
        (status = 400, description = "Malformed request body")
    ),
    request_body = ChatValidator
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatReply>, ApiError> {
    let user_id = payload
        .user_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| ANONYMOUS_USER.to_string());

    let reply = state
        .service
        .chat(ChatInput {
            message: payload.message,
            user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reply))
}
