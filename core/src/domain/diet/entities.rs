use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The five fixed pieces of diet guidance the coach can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    MealSuggestions,
    FoodsToAvoid,
    VitaminD3K2,
    RedMeatBenefits,
    DietExplanation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub topic: Topic,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Any,
    /// Unrecognized period, kept for the heading. Suggests every period.
    Other(String),
}

impl MealPeriod {
    /// Word used in the "Suggested ... meals:" heading, `None` for `Any`.
    pub fn label(&self) -> Option<&str> {
        match self {
            MealPeriod::Breakfast => Some("breakfast"),
            MealPeriod::Lunch => Some("lunch"),
            MealPeriod::Dinner => Some("dinner"),
            MealPeriod::Any => None,
            MealPeriod::Other(value) => Some(value),
        }
    }
}

impl From<&str> for MealPeriod {
    fn from(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "breakfast" => MealPeriod::Breakfast,
            "lunch" => MealPeriod::Lunch,
            "dinner" => MealPeriod::Dinner,
            "any" | "" => MealPeriod::Any,
            _ => MealPeriod::Other(normalized),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WinterVitaminGuide {
    pub title: String,
    pub guide: String,
    pub supplement_recommendations: Vec<String>,
    pub food_sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSuggestions {
    /// `None` when every period was requested.
    pub period: Option<String>,
    pub suggestions: Vec<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanDay {
    pub day: u32,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub days: u32,
    pub plan: Vec<MealPlanDay>,
    pub text: String,
}
