use crate::{
    domain::common::{CoachConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::openai_client::OpenAiClient, social::instagram_graph::InstagramGraphClient},
};

/// Service wired to the production collaborators. The OpenAI client serves
/// both chat completions and image generation.
pub type CoachService = Service<OpenAiClient, OpenAiClient, InstagramGraphClient>;

pub fn create_service(config: CoachConfig) -> Result<CoachService, CoreError> {
    let openai = OpenAiClient::new(config.llm)?;
    let instagram = InstagramGraphClient::new(config.social)?;

    tracing::info!("Carnivore coach service initialized");

    Ok(Service::new(openai.clone(), openai, instagram))
}
