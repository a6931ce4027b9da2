use crate::application::http::image::validators::GenerateImageValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use carnivore_core::domain::image::ports::ImageService;
use carnivore_core::domain::image::value_objects::GenerateImageInput;
use carnivore_core::domain::response::entities::ImagePost;

#[utoipa::path(
    post,
    path = "",
    tag = "image",
    summary = "Generate image post",
    description = "Generates a motivational image for the theme together with a ready-to-post caption and hashtags. A placeholder image is returned when generation fails.",
    responses(
        (status = 200, body = ImagePost),
        (status = 400, description = "Malformed request body")
    ),
    request_body = GenerateImageValidator
)]
pub async fn generate_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateImageValidator>,
) -> Result<Response<ImagePost>, ApiError> {
    let post = state
        .service
        .create_image_post(GenerateImageInput {
            theme: payload.theme,
            caption: payload.caption,
        })
        .await;

    Ok(Response::OK(post))
}
