use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, image::value_objects::GenerateImageInput,
    response::entities::ImagePost,
};

/// Text-to-image API
#[cfg_attr(test, mockall::automock)]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image and return its URL
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait ImageService: Send + Sync {
    /// URL of a motivational image for `theme`. Never fails: a generation
    /// error yields the placeholder image URL.
    fn generate_health_image(&self, theme: &str) -> impl Future<Output = String> + Send;

    fn create_image_post(
        &self,
        input: GenerateImageInput,
    ) -> impl Future<Output = ImagePost> + Send;
}
