use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrient field name (e.g. `protein_g`, `vitamin_b12_mcg`) to amount per 100g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientRecord(BTreeMap<String, f64>);

impl NutrientRecord {
    pub fn new<'a>(fields: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(name, amount)| (name.to_string(), amount))
                .collect(),
        )
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodNutrients {
    /// Food name as requested by the caller.
    pub food: String,
    pub nutrients: NutrientRecord,
    pub health_benefits: Vec<String>,
}
