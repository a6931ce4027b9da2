use crate::domain::{
    chat::{ports::ChatCompletionClient, router::IntentRouter},
    image::ports::ImageGenerator,
    nutrient::catalog::NutrientCatalog,
    response::assembler::ResponseAssembler,
    social::ports::SocialPublisher,
};

/// Process-wide service. The static tables are built once and shared by
/// every request; collaborators are cheap to clone.
#[derive(Clone)]
pub struct Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    pub(crate) nutrient_catalog: NutrientCatalog,
    pub(crate) intent_router: IntentRouter,
    pub(crate) assembler: ResponseAssembler,
    pub(crate) llm_client: LLM,
    pub(crate) image_generator: IG,
    pub(crate) social_publisher: SP,
}

impl<LLM, IG, SP> Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    pub fn new(llm_client: LLM, image_generator: IG, social_publisher: SP) -> Self {
        Self {
            nutrient_catalog: NutrientCatalog::carnivore(),
            intent_router: IntentRouter::default(),
            assembler: ResponseAssembler::default(),
            llm_client,
            image_generator,
            social_publisher,
        }
    }
}

#[cfg(test)]
pub(crate) type MockedService = Service<
    crate::domain::chat::ports::MockChatCompletionClient,
    crate::domain::image::ports::MockImageGenerator,
    crate::domain::social::ports::MockSocialPublisher,
>;

#[cfg(test)]
impl MockedService {
    /// Service whose collaborators panic on any call.
    pub(crate) fn idle() -> Self {
        Service::new(
            crate::domain::chat::ports::MockChatCompletionClient::new(),
            crate::domain::image::ports::MockImageGenerator::new(),
            crate::domain::social::ports::MockSocialPublisher::new(),
        )
    }
}
