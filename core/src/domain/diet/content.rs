//! Fixed diet guidance. Every function is pure: same input, same text.

use crate::domain::diet::entities::{
    ContentBlock, MealPeriod, MealPlan, MealPlanDay, Topic, WinterVitaminGuide,
};

const DIET_EXPLANATION: &str = r#"The Carnivore Diet is a zero-carb, high-fat diet that consists entirely of animal products.

🔥 Key Benefits:
1. Rapid fat loss and weight management
2. Reduced inflammation and autoimmune symptoms
3. Improved mental clarity and focus
4. Stable energy throughout the day
5. Simplified eating with no carb counting

🥩 What to Eat:
• Red meat (beef, lamb, bison)
• Organ meats (liver, heart, kidney)
• Poultry (chicken, turkey, duck)
• Fish and seafood
• Eggs
• Animal fats (butter, tallow, lard)

❌ What to Avoid:
• All plant foods (vegetables, fruits, grains)
• Sugars and sweeteners
• Seed oils (canola, soybean, corn oil)
• Processed foods
• Alcohol"#;

const VITAMIN_D3_K2: &str = r#"🌞 Vitamin D3 + K2: The Winter Essentials

Why they're crucial in winter:
1. **Vitamin D3**:
   • Sunlight exposure drops significantly in winter
   • Most people become deficient without supplementation
   • Essential for immune function, bone health, and mood regulation
   • Carnivore sources: Fatty fish (salmon, mackerel), liver, egg yolks

2. **Vitamin K2**:
   • Works synergistically with D3
   • Directs calcium to bones (not arteries)
   • Prevents arterial calcification
   • Carnivore sources: Goose liver, hard cheeses, butter from grass-fed cows

💊 Recommended Winter Protocol:
• D3: 5000-10000 IU daily with fatty meal
• K2 (MK-7): 100-200mcg daily
• Always take together for optimal absorption
• Get blood levels checked every 3-6 months"#;

const RED_MEAT_BENEFITS: &str = r#"🥩 Why Red Meat is King:

Nutrient Density Comparison (per 100g):
• Complete Protein: 20-30g vs 2-3g in plants
• Heme Iron: Highly bioavailable vs non-heme in plants
• Zinc: 5-7mg vs 1-2mg in plant sources
• B12: Found ONLY in animal products
• Creatine: Essential for brain and muscle function
• Carnosine: Anti-aging and muscle endurance
• CLA: Natural fat-burning compound
• Cholesterol: Essential for hormone production

🌱 Anti-Nutrients in Plants:
• Oxalates (kidney stones)
• Lectins (gut irritation)
• Phytic acid (mineral blocker)
• Goitrogens (thyroid disruption)
• FODMAPs (digestive issues)

Red meat contains none of these!"#;

const FOODS_TO_AVOID: &[&str] = &[
    "🚫 Seed oils: Canola, soybean, corn, sunflower, safflower oil",
    "🚫 Sugars: All forms including honey, maple syrup, agave",
    "🚫 Grains: Wheat, rice, oats, corn, quinoa",
    "🚫 Legumes: Beans, lentils, peanuts, soy",
    "🚫 Processed foods: Anything with ingredient labels",
    "🚫 Vegetables high in oxalates: Spinach, kale, almonds, beets",
    "🚫 Fruits: All fruits (except occasional berries in keto)",
    "🚫 Alcohol: Beer, wine, spirits (except occasional dry wine in keto)",
    "🚫 Artificial sweeteners: Aspartame, sucralose, saccharin",
];

const BREAKFAST_MEALS: &[&str] = &[
    "🥚 4-6 scrambled eggs cooked in butter or tallow",
    "🥓 4-6 slices of bacon or sausage",
    "🥩 Leftover steak from dinner",
    "🍳 Ribeye steak and eggs",
];

const LUNCH_MEALS: &[&str] = &[
    "🍔 2-3 beef burger patties (no bun)",
    "🍗 Chicken thighs with skin cooked in duck fat",
    "🥩 8-12oz of ground beef with melted cheese",
    "🐟 Canned sardines or salmon",
];

const DINNER_MEALS: &[&str] = &[
    "🥩 12-16oz ribeye or New York strip steak",
    "🐑 Lamb chops with rosemary butter",
    "🐖 Pork belly or pork shoulder",
    "🍣 Salmon fillet with lemon butter sauce",
];

const WINTER_SUPPLEMENTS: &[&str] = &[
    "Vitamin D3: 5000-10000 IU daily",
    "Vitamin K2 (MK-7): 100-200mcg daily",
    "Magnesium: 400mg before bed",
    "Cod Liver Oil: 1 tsp daily",
];

const WINTER_FOOD_SOURCES: &[&str] = &[
    "Fatty fish (salmon, mackerel, sardines)",
    "Grass-fed butter and ghee",
    "Egg yolks from pasture-raised chickens",
    "Beef liver (once per week)",
];

/// Longest plan the coach accepts.
pub const MAX_PLAN_DAYS: u32 = 30;

const PLAN_BREAKFAST: &str = "4 eggs + 4 bacon slices";
const PLAN_LUNCH: &str = "8oz ground beef patties (2)";
const PLAN_DINNER: &str = "12oz ribeye steak + butter";
const PLAN_SNACK: &str = "Pork rinds or hard cheese";
const OMAD_NOTE: &str = "Or stick One Meal A day";

pub fn explain_carnivore_diet() -> String {
    DIET_EXPLANATION.to_string()
}

/// Meal list for one period. `Any` and unrecognized periods get breakfast,
/// lunch and dinner in that order.
pub fn meals_for(period: &MealPeriod) -> Vec<&'static str> {
    match period {
        MealPeriod::Breakfast => BREAKFAST_MEALS.to_vec(),
        MealPeriod::Lunch => LUNCH_MEALS.to_vec(),
        MealPeriod::Dinner => DINNER_MEALS.to_vec(),
        MealPeriod::Any | MealPeriod::Other(_) => [BREAKFAST_MEALS, LUNCH_MEALS, DINNER_MEALS]
            .concat(),
    }
}

pub fn suggest_meals(period: &MealPeriod) -> String {
    let heading = match period.label() {
        Some(label) => format!("Suggested {label} meals:"),
        None => "Suggested meals:".to_string(),
    };

    let bullets = meals_for(period)
        .iter()
        .map(|meal| format!("• {meal}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{heading}\n{bullets}")
}

pub fn explain_vitamin_d3_k2() -> String {
    VITAMIN_D3_K2.to_string()
}

pub fn list_foods_to_avoid() -> String {
    format!(
        "🍽️ Foods to Avoid on Carnivore/Keto:\n{}",
        FOODS_TO_AVOID.join("\n")
    )
}

pub fn explain_red_meat_benefits() -> String {
    RED_MEAT_BENEFITS.to_string()
}

/// Content for a routed topic. Meal suggestions from chat are never narrowed
/// to a single period.
pub fn render(topic: Topic) -> ContentBlock {
    let text = match topic {
        Topic::MealSuggestions => suggest_meals(&MealPeriod::Any),
        Topic::FoodsToAvoid => list_foods_to_avoid(),
        Topic::VitaminD3K2 => explain_vitamin_d3_k2(),
        Topic::RedMeatBenefits => explain_red_meat_benefits(),
        Topic::DietExplanation => explain_carnivore_diet(),
    };

    ContentBlock { topic, text }
}

pub fn winter_vitamin_guide() -> WinterVitaminGuide {
    WinterVitaminGuide {
        title: "Winter Vitamin Protocol for Carnivores".to_string(),
        guide: explain_vitamin_d3_k2(),
        supplement_recommendations: WINTER_SUPPLEMENTS.iter().map(|s| s.to_string()).collect(),
        food_sources: WINTER_FOOD_SOURCES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Day-by-day plan repeating the same four meals. Callers bound `days` to
/// `1..=MAX_PLAN_DAYS`.
pub fn meal_plan(days: u32) -> MealPlan {
    let plan = (1..=days)
        .map(|day| MealPlanDay {
            day,
            breakfast: PLAN_BREAKFAST.to_string(),
            lunch: PLAN_LUNCH.to_string(),
            dinner: PLAN_DINNER.to_string(),
            snack: PLAN_SNACK.to_string(),
        })
        .collect::<Vec<_>>();

    let mut text = format!("{days}-Day Carnivore Meal Plan:\n\n");
    for entry in &plan {
        text.push_str(&format!(
            "Day {}:\nBreakfast: {}\nLunch: {}\nDinner: {}\nSnack: {}\n\n",
            entry.day, entry.breakfast, entry.lunch, entry.dinner, entry.snack
        ));
    }
    text.push_str(OMAD_NOTE);

    MealPlan { days, plan, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakfast_returns_only_breakfast_items() {
        let text = suggest_meals(&MealPeriod::Breakfast);

        assert!(text.starts_with("Suggested breakfast meals:\n"));
        for meal in BREAKFAST_MEALS {
            assert!(text.contains(meal));
        }
        for meal in LUNCH_MEALS.iter().chain(DINNER_MEALS) {
            assert!(!text.contains(meal));
        }
        assert_eq!(text.lines().count(), 1 + BREAKFAST_MEALS.len());
    }

    #[test]
    fn test_unrecognized_period_concatenates_all_periods() {
        let period = MealPeriod::from("Brunch");
        let meals = meals_for(&period);

        assert_eq!(period, MealPeriod::Other("brunch".to_string()));
        assert_eq!(meals, [BREAKFAST_MEALS, LUNCH_MEALS, DINNER_MEALS].concat());
        assert!(suggest_meals(&period).starts_with("Suggested brunch meals:\n"));
    }

    #[test]
    fn test_any_period_has_plain_heading() {
        let text = suggest_meals(&MealPeriod::from("ANY"));

        assert!(text.starts_with("Suggested meals:\n• 🥚"));
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn test_period_parsing_is_case_insensitive() {
        assert_eq!(MealPeriod::from(" Dinner "), MealPeriod::Dinner);
        assert_eq!(MealPeriod::from("LUNCH"), MealPeriod::Lunch);
        assert_eq!(MealPeriod::from(""), MealPeriod::Any);
    }

    #[test]
    fn test_foods_to_avoid_lists_every_entry() {
        let text = list_foods_to_avoid();

        assert!(text.starts_with("🍽️ Foods to Avoid on Carnivore/Keto:\n"));
        assert_eq!(text.lines().count(), 1 + FOODS_TO_AVOID.len());
    }

    #[test]
    fn test_render_is_deterministic() {
        for topic in [
            Topic::MealSuggestions,
            Topic::FoodsToAvoid,
            Topic::VitaminD3K2,
            Topic::RedMeatBenefits,
            Topic::DietExplanation,
        ] {
            assert_eq!(render(topic), render(topic));
            assert_eq!(render(topic).topic, topic);
        }
    }

    #[test]
    fn test_winter_guide_reuses_vitamin_content() {
        let guide = winter_vitamin_guide();

        assert_eq!(guide.guide, explain_vitamin_d3_k2());
        assert_eq!(guide.supplement_recommendations.len(), 4);
        assert_eq!(guide.food_sources[3], "Beef liver (once per week)");
    }

    #[test]
    fn test_meal_plan_has_one_entry_per_day() {
        let plan = meal_plan(3);

        assert_eq!(plan.days, 3);
        assert_eq!(
            plan.plan.iter().map(|d| d.day).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(plan.plan[2].dinner, "12oz ribeye steak + butter");
    }

    #[test]
    fn test_meal_plan_text_layout() {
        let text = meal_plan(2).text;

        assert!(text.starts_with(
            "2-Day Carnivore Meal Plan:\n\nDay 1:\nBreakfast: 4 eggs + 4 bacon slices\n"
        ));
        assert!(text.contains("\nDay 2:\nBreakfast:"));
        assert!(text.ends_with("Snack: Pork rinds or hard cheese\n\nOr stick One Meal A day"));
        assert_eq!(text.matches(OMAD_NOTE).count(), 1);
    }
}
