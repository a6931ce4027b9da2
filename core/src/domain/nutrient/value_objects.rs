/// Catalog key of a food: lowercase, trimmed, spaces replaced by underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodKey(String);

impl FoodKey {
    pub fn normalize(food_name: &str) -> Self {
        Self(food_name.trim().to_lowercase().replace(' ', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
