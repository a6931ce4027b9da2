use crate::domain::{
    chat::ports::ChatCompletionClient,
    common::{entities::app_errors::CoreError, services::Service},
    diet::{
        content::{self, MAX_PLAN_DAYS},
        entities::{MealPeriod, MealPlan, MealSuggestions, WinterVitaminGuide},
        ports::DietService,
    },
    image::ports::ImageGenerator,
    social::ports::SocialPublisher,
};

impl<LLM, IG, SP> DietService for Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    fn suggest_meals(&self, period: MealPeriod) -> MealSuggestions {
        MealSuggestions {
            period: period.label().map(str::to_string),
            suggestions: content::meals_for(&period)
                .into_iter()
                .map(str::to_string)
                .collect(),
            text: content::suggest_meals(&period),
        }
    }

    fn winter_vitamin_guide(&self) -> WinterVitaminGuide {
        content::winter_vitamin_guide()
    }

    fn meal_plan(&self, days: u32) -> Result<MealPlan, CoreError> {
        if !(1..=MAX_PLAN_DAYS).contains(&days) {
            return Err(CoreError::Invalid(format!(
                "days must be between 1 and {MAX_PLAN_DAYS}"
            )));
        }

        Ok(content::meal_plan(days))
    }
}
