use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateImageValidator {
    /// One of motivation, food, before_after, nutrients. Other themes,
    /// including an empty one, get the motivation image and a generic caption.
    pub theme: String,

    #[serde(default)]
    pub caption: Option<String>,
}
