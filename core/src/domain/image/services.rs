use tracing::instrument;

use crate::domain::{
    chat::ports::ChatCompletionClient,
    common::services::Service,
    image::{
        ports::{ImageGenerator, ImageService},
        prompts::{PLACEHOLDER_IMAGE_URL, health_image_prompt},
        value_objects::GenerateImageInput,
    },
    response::entities::ImagePost,
    social::ports::SocialPublisher,
};

impl<LLM, IG, SP> ImageService for Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    #[instrument(skip(self))]
    async fn generate_health_image(&self, theme: &str) -> String {
        match self.image_generator.generate(health_image_prompt(theme)).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "Image generation failed, using placeholder");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }

    async fn create_image_post(&self, input: GenerateImageInput) -> ImagePost {
        let image_url = self.generate_health_image(&input.theme).await;

        self.assembler
            .image_post(image_url, &input.theme, input.caption.as_deref())
    }
}
