use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    social::{
        entities::{
            CommentReplyReport, DailyPost, MediaSummary, PublishOutcome, PublishedMedia,
            SocialComment,
        },
        value_objects::DailyPostInput,
    },
};

/// Social network account the coach publishes to (Instagram Graph API)
#[cfg_attr(test, mockall::automock)]
pub trait SocialPublisher: Send + Sync {
    /// Publish a single photo with its caption
    fn publish_photo(
        &self,
        image_url: String,
        caption: String,
    ) -> impl Future<Output = Result<PublishedMedia, CoreError>> + Send;

    /// Most recent media of the account, newest first
    fn recent_media(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<MediaSummary>, CoreError>> + Send;

    fn media_comments(
        &self,
        media_id: String,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SocialComment>, CoreError>> + Send;

    fn reply_to_comment(
        &self,
        comment_id: String,
        text: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait SocialService: Send + Sync {
    /// Publish a post. Failures are logged and reported, never raised.
    fn publish(
        &self,
        caption: String,
        image_url: Option<String>,
    ) -> impl Future<Output = PublishOutcome> + Send;

    /// Compose the post of the day (caption and image) and publish it.
    fn post_daily_content(
        &self,
        input: DailyPostInput,
    ) -> impl Future<Output = Result<DailyPost, CoreError>> + Send;

    /// Reply to unanswered comments on the most recent posts.
    fn respond_to_comments(
        &self,
    ) -> impl Future<Output = Result<CommentReplyReport, CoreError>> + Send;
}
