use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub response: String,
    pub suggested_actions: Vec<String>,
}

/// Image ready to be shared: URL plus caption, hashtags and the requested theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImagePost {
    pub image_url: String,
    pub caption: String,
    pub hashtags: String,
    pub theme: String,
}
