pub mod generate_meal_plan;
pub mod get_meals;
pub mod get_winter_vitamin_guide;
