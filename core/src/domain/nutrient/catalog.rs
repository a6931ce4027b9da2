use std::{collections::HashMap, sync::Arc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrient::{entities::NutrientRecord, value_objects::FoodKey},
};

const DEFAULT_BENEFITS: &[&str] = &["Rich in essential nutrients"];

/// Static nutrient table, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct NutrientCatalog {
    foods: Arc<HashMap<FoodKey, NutrientRecord>>,
    benefits: Arc<HashMap<FoodKey, Vec<String>>>,
}

impl NutrientCatalog {
    pub fn carnivore() -> Self {
        let foods = [
            (
                "ribeye_steak",
                NutrientRecord::new([
                    ("protein_g", 29.0),
                    ("fat_g", 24.0),
                    ("carbs_g", 0.0),
                    ("calories", 330.0),
                    ("vitamin_b12_mcg", 2.9),
                    ("zinc_mg", 6.2),
                    ("iron_mg", 2.4),
                ]),
            ),
            (
                "eggs",
                NutrientRecord::new([
                    ("protein_g", 13.0),
                    ("fat_g", 11.0),
                    ("carbs_g", 1.0),
                    ("calories", 155.0),
                    ("vitamin_d_iu", 87.0),
                    ("choline_mg", 147.0),
                    ("selenium_mcg", 23.0),
                ]),
            ),
            (
                "liver",
                NutrientRecord::new([
                    ("protein_g", 26.0),
                    ("fat_g", 4.0),
                    ("carbs_g", 3.0),
                    ("calories", 153.0),
                    ("vitamin_a_iu", 16898.0),
                    ("vitamin_b12_mcg", 70.6),
                    ("copper_mg", 12.0),
                ]),
            ),
        ];

        let benefits = [
            (
                "ribeye_steak",
                [
                    "Complete protein for muscle building",
                    "Heme iron for energy production",
                    "Zinc for immune function",
                    "Creatine for brain and muscle health",
                ],
            ),
            (
                "eggs",
                [
                    "Perfect protein source",
                    "Choline for brain health",
                    "Vitamin D for immune function",
                    "Lutein for eye health",
                ],
            ),
            (
                "liver",
                [
                    "Nature's multivitamin",
                    "High in Vitamin A for vision",
                    "Massive B12 for energy",
                    "Copper for joint health",
                ],
            ),
        ];

        Self {
            foods: Arc::new(
                foods
                    .into_iter()
                    .map(|(name, record)| (FoodKey::normalize(name), record))
                    .collect(),
            ),
            benefits: Arc::new(
                benefits
                    .into_iter()
                    .map(|(name, list)| {
                        (
                            FoodKey::normalize(name),
                            list.iter().map(|b| b.to_string()).collect(),
                        )
                    })
                    .collect(),
            ),
        }
    }

    pub fn lookup(&self, food_name: &str) -> Result<&NutrientRecord, CoreError> {
        self.foods
            .get(&FoodKey::normalize(food_name))
            .ok_or(CoreError::FoodNotFound)
    }

    /// Health benefits of a food. Foods without a dedicated list get a generic one.
    pub fn benefits(&self, food_name: &str) -> Vec<String> {
        self.benefits
            .get(&FoodKey::normalize(food_name))
            .cloned()
            .unwrap_or_else(|| DEFAULT_BENEFITS.iter().map(|b| b.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_liver_returns_exact_record() {
        let catalog = NutrientCatalog::carnivore();
        let record = catalog.lookup("Liver").unwrap();

        assert_eq!(record.len(), 7);
        assert_eq!(record.get("protein_g"), Some(26.0));
        assert_eq!(record.get("fat_g"), Some(4.0));
        assert_eq!(record.get("carbs_g"), Some(3.0));
        assert_eq!(record.get("calories"), Some(153.0));
        assert_eq!(record.get("vitamin_a_iu"), Some(16898.0));
        assert_eq!(record.get("vitamin_b12_mcg"), Some(70.6));
        assert_eq!(record.get("copper_mg"), Some(12.0));
    }

    #[test]
    fn test_lookup_ribeye_returns_exact_record() {
        let catalog = NutrientCatalog::carnivore();
        let record = catalog.lookup("ribeye_steak").unwrap();

        assert_eq!(record.len(), 7);
        assert_eq!(record.get("protein_g"), Some(29.0));
        assert_eq!(record.get("fat_g"), Some(24.0));
        assert_eq!(record.get("carbs_g"), Some(0.0));
        assert_eq!(record.get("calories"), Some(330.0));
        assert_eq!(record.get("vitamin_b12_mcg"), Some(2.9));
        assert_eq!(record.get("zinc_mg"), Some(6.2));
        assert_eq!(record.get("iron_mg"), Some(2.4));
    }

    #[test]
    fn test_lookup_eggs_returns_exact_record() {
        let catalog = NutrientCatalog::carnivore();
        let record = catalog.lookup("Eggs").unwrap();

        assert_eq!(record.len(), 7);
        assert_eq!(record.get("protein_g"), Some(13.0));
        assert_eq!(record.get("fat_g"), Some(11.0));
        assert_eq!(record.get("carbs_g"), Some(1.0));
        assert_eq!(record.get("calories"), Some(155.0));
        assert_eq!(record.get("vitamin_d_iu"), Some(87.0));
        assert_eq!(record.get("choline_mg"), Some(147.0));
        assert_eq!(record.get("selenium_mcg"), Some(23.0));
    }

    #[test]
    fn test_lookup_accepts_case_and_space_variants() {
        let catalog = NutrientCatalog::carnivore();
        let expected = catalog.lookup("ribeye_steak").unwrap();

        for name in ["Ribeye Steak", "RIBEYE STEAK", "  ribeye steak  ", "ribeye_steak"] {
            assert_eq!(catalog.lookup(name).unwrap(), expected, "variant {name:?}");
        }
    }

    #[test]
    fn test_lookup_unknown_food_is_not_found() {
        let catalog = NutrientCatalog::carnivore();

        assert_eq!(catalog.lookup("kale"), Err(CoreError::FoodNotFound));
        assert_eq!(catalog.lookup(""), Err(CoreError::FoodNotFound));
        assert_eq!(catalog.lookup("ribeye"), Err(CoreError::FoodNotFound));
    }

    #[test]
    fn test_benefits_known_and_default() {
        let catalog = NutrientCatalog::carnivore();

        assert_eq!(catalog.benefits("Liver")[0], "Nature's multivitamin");
        assert_eq!(catalog.benefits("eggs").len(), 4);
        assert_eq!(catalog.benefits("bison"), vec!["Rich in essential nutrients"]);
    }
}
