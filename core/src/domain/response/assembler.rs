use crate::domain::response::entities::{ChatReply, ImagePost};

pub const SUGGESTED_ACTIONS: &[&str] = &[
    "Get meal suggestions",
    "Learn about nutrients",
    "See foods to avoid",
    "Generate motivational image",
];

pub const IMAGE_HASHTAGS: &str =
    "#CarnivoreDiet #Keto #LowCarb #AnimalBased #Health #Wellness #Nutrition #RealFood";

pub const GENERIC_CAPTION: &str = "Carnivore lifestyle for optimal health! #Carnivore #Health";

const THEME_CAPTIONS: &[(&str, &str)] = &[
    (
        "motivation",
        "🔥 Feeling unstoppable on carnivore! Your body was designed to thrive on animal foods. #CarnivoreDiet #HealthTransformation",
    ),
    (
        "food",
        "🥩 This is what optimal nutrition looks like! Real food doesn't need labels. #Steak #RealFood #CarnivoreLifestyle",
    ),
    (
        "before_after",
        "🎯 Consistency beats perfection. Trust the process, eat the meat! #Transformation #CarnivoreJourney",
    ),
    (
        "nutrients",
        "⚡️ Nutrient density on a plate! Everything your body needs in its most bioavailable form. #NutrientDense #AnimalBased",
    ),
];

/// Wraps content into outbound payloads. Total over its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseAssembler;

impl ResponseAssembler {
    pub fn chat_reply(&self, body: String) -> ChatReply {
        ChatReply {
            response: body,
            suggested_actions: SUGGESTED_ACTIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// A non-empty explicit caption wins; otherwise the theme's caption, or
    /// the generic one for unknown themes.
    pub fn caption_for(&self, theme: &str, explicit_caption: Option<&str>) -> String {
        if let Some(caption) = explicit_caption.filter(|c| !c.is_empty()) {
            return caption.to_string();
        }

        THEME_CAPTIONS
            .iter()
            .find(|(name, _)| *name == theme)
            .map(|(_, caption)| caption.to_string())
            .unwrap_or_else(|| GENERIC_CAPTION.to_string())
    }

    pub fn image_post(
        &self,
        image_url: String,
        theme: &str,
        explicit_caption: Option<&str>,
    ) -> ImagePost {
        ImagePost {
            image_url,
            caption: self.caption_for(theme, explicit_caption),
            hashtags: IMAGE_HASHTAGS.to_string(),
            theme: theme.to_string(),
        }
    }
}
