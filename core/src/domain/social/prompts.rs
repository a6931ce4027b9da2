use chrono::Weekday;

pub const SOCIAL_HASHTAGS: &[&str] = &[
    "#CarnivoreDiet",
    "#Carnivore",
    "#Keto",
    "#LowCarb",
    "#AnimalBased",
    "#MeatHeals",
    "#Steak",
    "#LCHF",
    "#ZeroCarb",
    "#CarnivoreLifestyle",
    "#Health",
];

/// Number of hashtags appended to a daily caption.
pub const DAILY_HASHTAG_COUNT: usize = 7;

pub const CONTENT_CREATOR_PERSONA: &str =
    "You are a carnivore diet expert creating social media content.";

pub const COMMENT_COACH_PERSONA: &str = "You are a helpful carnivore diet coach.";

const DAILY_THEMES: [&str; 7] = [
    "motivational monday",
    "nutrition tuesday",
    "recipe wednesday",
    "transformation thursday",
    "faq friday",
    "science saturday",
    "sunday meal prep",
];

const DEFAULT_POST_IMAGE_PROMPT: &str = "Healthy person enjoying carnivore diet foods";

const POST_IMAGE_PROMPTS: &[(&str, &str)] = &[
    (
        "motivational monday",
        "Strong healthy person surrounded by carnivore foods, energetic, vibrant colors, inspirational",
    ),
    (
        "nutrition tuesday",
        "Beautiful infographic showing nutrient density of meat vs plants, scientific, clear",
    ),
    (
        "recipe wednesday",
        "Delicious looking steak with butter, perfect sear, food photography, mouth-watering",
    ),
    (
        "transformation thursday",
        "Before and after transformation showing health improvement, side by side",
    ),
    (
        "science saturday",
        "Scientific diagram showing benefits of carnivore diet on human body, educational",
    ),
];

pub fn daily_theme(weekday: Weekday) -> &'static str {
    DAILY_THEMES[weekday.num_days_from_monday() as usize]
}

pub fn daily_post_prompt(theme: &str) -> String {
    format!(
        "Create an engaging Instagram post about the carnivore diet for {theme}.\n\
         Include:\n\
         1. A catchy title\n\
         2. 2-3 key points about carnivore benefits\n\
         3. A call to action\n\
         4. Relevant emojis\n\
         \n\
         Theme: {theme}"
    )
}

pub fn post_image_prompt(theme: &str) -> &'static str {
    POST_IMAGE_PROMPTS
        .iter()
        .find(|(name, _)| *name == theme)
        .map(|(_, prompt)| *prompt)
        .unwrap_or(DEFAULT_POST_IMAGE_PROMPT)
}

pub fn comment_reply_prompt(comment_text: &str) -> String {
    format!(
        "A follower commented on our carnivore diet post: \"{comment_text}\"\n\
         \n\
         Respond helpfully and positively. Keep it under 150 characters."
    )
}

/// Generated caption followed by a blank line and the daily hashtags.
pub fn with_hashtags(caption: &str) -> String {
    format!(
        "{}\n\n{}",
        caption.trim_end(),
        SOCIAL_HASHTAGS[..DAILY_HASHTAG_COUNT].join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_theme_follows_weekday() {
        assert_eq!(daily_theme(Weekday::Mon), "motivational monday");
        assert_eq!(daily_theme(Weekday::Fri), "faq friday");
        assert_eq!(daily_theme(Weekday::Sun), "sunday meal prep");
    }

    #[test]
    fn test_post_image_prompt_falls_back_for_untabled_themes() {
        assert!(post_image_prompt("recipe wednesday").starts_with("Delicious looking steak"));
        assert_eq!(post_image_prompt("faq friday"), DEFAULT_POST_IMAGE_PROMPT);
        assert_eq!(post_image_prompt("sunday meal prep"), DEFAULT_POST_IMAGE_PROMPT);
    }

    #[test]
    fn test_with_hashtags_appends_first_seven() {
        let caption = with_hashtags("Steak day!\n");

        assert_eq!(
            caption,
            "Steak day!\n\n#CarnivoreDiet #Carnivore #Keto #LowCarb #AnimalBased #MeatHeals #Steak"
        );
    }

    #[test]
    fn test_daily_post_prompt_mentions_theme() {
        let prompt = daily_post_prompt("faq friday");

        assert!(prompt.starts_with("Create an engaging Instagram post about the carnivore diet for faq friday."));
        assert!(prompt.ends_with("Theme: faq friday"));
    }
}
