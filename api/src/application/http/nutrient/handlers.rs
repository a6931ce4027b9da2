pub mod get_food_nutrients;
