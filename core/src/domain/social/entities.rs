use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublishedMedia {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSummary {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialComment {
    pub id: String,
    pub text: String,
    /// The comment already has at least one reply.
    pub replied: bool,
}

/// Result of a publish attempt. Publishing never raises: failures are reported here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PublishOutcome {
    Published { media_id: String },
    /// Nothing to post without an image; not treated as a failure.
    SkippedNoImage,
    Failed { reason: String },
}

impl PublishOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, PublishOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyPost {
    pub theme: String,
    pub caption: String,
    pub image_url: Option<String>,
    pub outcome: PublishOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentReplyReport {
    pub replied: u32,
    pub failed: u32,
}
