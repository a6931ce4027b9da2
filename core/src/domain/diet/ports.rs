use crate::domain::{
    common::entities::app_errors::CoreError,
    diet::entities::{MealPeriod, MealPlan, MealSuggestions, WinterVitaminGuide},
};

pub trait DietService: Send + Sync {
    fn suggest_meals(&self, period: MealPeriod) -> MealSuggestions;

    fn winter_vitamin_guide(&self) -> WinterVitaminGuide;

    /// Fails with `Invalid` when `days` is outside `1..=MAX_PLAN_DAYS`.
    fn meal_plan(&self, days: u32) -> Result<MealPlan, CoreError>;
}
