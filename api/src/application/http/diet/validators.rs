use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetMealsQuery {
    /// breakfast, lunch or dinner; any other value lists every meal
    pub period: Option<String>,
}

fn default_plan_days() -> u32 {
    7
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct MealPlanValidator {
    #[validate(range(min = 1, max = 30, message = "days must be between 1 and 30"))]
    #[serde(default = "default_plan_days")]
    pub days: u32,

    /// Accepted for client compatibility, not used when planning
    #[serde(default)]
    pub calories_per_day: Option<u32>,

    /// Accepted for client compatibility, not used when planning
    #[serde(default)]
    pub preferences: Vec<String>,
}
