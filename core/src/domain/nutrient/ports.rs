use crate::domain::{common::entities::app_errors::CoreError, nutrient::entities::FoodNutrients};

pub trait NutrientService: Send + Sync {
    /// Nutrients and health benefits of a food, or `CoreError::FoodNotFound`
    /// when the normalized name is not in the catalog.
    fn get_food_nutrients(&self, food_name: &str) -> Result<FoodNutrients, CoreError>;
}
