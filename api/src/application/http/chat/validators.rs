use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatValidator {
    /// Any text, including empty; unmatched messages go to the language model
    pub message: String,

    #[serde(default)]
    pub user_id: Option<String>,

    /// Accepted for client compatibility, not used when answering
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub context: Option<serde_json::Value>,
}
