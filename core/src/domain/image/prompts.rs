pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/1024x1024/FF6B35/FFFFFF?text=Carnivore+Health";

const PROMPT_SUFFIX: &str = "Health, wellness, carnivore diet, ketogenic lifestyle.";

const THEME_PROMPTS: &[(&str, &str)] = &[
    (
        "motivation",
        "A vibrant, energetic person feeling healthy and strong, surrounded by delicious carnivore foods like steak and eggs, bright colors, motivational",
    ),
    (
        "food",
        "Beautiful photography of carnivore diet foods: ribeye steak with butter, crispy bacon, eggs, salmon, artistic food photography, high quality",
    ),
    (
        "before_after",
        "Dramatic transformation showing someone going from unhealthy to vibrant health, side by side comparison, inspiring",
    ),
    (
        "nutrients",
        "Creative visualization of nutrients from meat entering the body, showing energy and health benefits, scientific but beautiful",
    ),
];

/// Full prompt for a theme. Unknown themes fall back to the motivation prompt.
pub fn health_image_prompt(theme: &str) -> String {
    let base = THEME_PROMPTS
        .iter()
        .find(|(name, _)| *name == theme)
        .unwrap_or(&THEME_PROMPTS[0])
        .1;

    format!("{base}. {PROMPT_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_theme_prompt_has_suffix() {
        let prompt = health_image_prompt("food");

        assert!(prompt.starts_with("Beautiful photography of carnivore diet foods"));
        assert!(prompt.ends_with(". Health, wellness, carnivore diet, ketogenic lifestyle."));
    }

    #[test]
    fn test_unknown_theme_uses_motivation_prompt() {
        assert_eq!(health_image_prompt("galaxy"), health_image_prompt("motivation"));
    }
}
