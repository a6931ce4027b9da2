use crate::domain::{
    chat::ports::ChatCompletionClient,
    common::{entities::app_errors::CoreError, services::Service},
    image::ports::ImageGenerator,
    nutrient::{entities::FoodNutrients, ports::NutrientService},
    social::ports::SocialPublisher,
};

impl<LLM, IG, SP> NutrientService for Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    fn get_food_nutrients(&self, food_name: &str) -> Result<FoodNutrients, CoreError> {
        let nutrients = self.nutrient_catalog.lookup(food_name).inspect_err(|_| {
            tracing::debug!(food_name = %food_name, "Food not in nutrient catalog");
        })?;

        Ok(FoodNutrients {
            food: food_name.to_string(),
            nutrients: nutrients.clone(),
            health_benefits: self.nutrient_catalog.benefits(food_name),
        })
    }
}
