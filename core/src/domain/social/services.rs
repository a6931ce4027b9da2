use tracing::instrument;

use crate::domain::{
    chat::{ports::ChatCompletionClient, value_objects::CompletionRequest},
    common::{entities::app_errors::CoreError, services::Service},
    image::ports::ImageGenerator,
    social::{
        entities::{CommentReplyReport, DailyPost, PublishOutcome},
        ports::{SocialPublisher, SocialService},
        prompts::{
            COMMENT_COACH_PERSONA, CONTENT_CREATOR_PERSONA, comment_reply_prompt, daily_post_prompt,
            daily_theme, post_image_prompt, with_hashtags,
        },
        value_objects::DailyPostInput,
    },
};

const RECENT_MEDIA_LIMIT: usize = 5;
const COMMENTS_PER_MEDIA: usize = 20;

impl<LLM, IG, SP> Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    async fn generate_daily_caption(&self, theme: &str) -> Result<String, CoreError> {
        let caption = self
            .llm_client
            .complete(CompletionRequest {
                system_prompt: CONTENT_CREATOR_PERSONA.to_string(),
                user_prompt: daily_post_prompt(theme),
                temperature: 0.7,
                max_tokens: 200,
            })
            .await?;

        Ok(with_hashtags(&caption))
    }

    /// Unlike the image endpoint there is no placeholder here: without an
    /// image the post is skipped.
    async fn generate_post_image(&self, theme: &str) -> Option<String> {
        match self
            .image_generator
            .generate(post_image_prompt(theme).to_string())
            .await
        {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(error = %e, theme = %theme, "Post image generation failed");
                None
            }
        }
    }

    async fn generate_comment_reply(&self, comment_text: &str) -> Result<String, CoreError> {
        self.llm_client
            .complete(CompletionRequest {
                system_prompt: COMMENT_COACH_PERSONA.to_string(),
                user_prompt: comment_reply_prompt(comment_text),
                temperature: 0.3,
                max_tokens: 100,
            })
            .await
    }
}

impl<LLM, IG, SP> SocialService for Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    #[instrument(skip(self, caption))]
    async fn publish(&self, caption: String, image_url: Option<String>) -> PublishOutcome {
        let Some(image_url) = image_url else {
            tracing::warn!("No image to post");
            return PublishOutcome::SkippedNoImage;
        };

        match self
            .social_publisher
            .publish_photo(image_url, caption)
            .await
        {
            Ok(media) => {
                tracing::info!(media_id = %media.id, "Posted to Instagram successfully");
                PublishOutcome::Published { media_id: media.id }
            }
            Err(e) => {
                tracing::error!(error = %e, "Post failed");
                PublishOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    #[instrument(skip(self))]
    async fn post_daily_content(&self, input: DailyPostInput) -> Result<DailyPost, CoreError> {
        let theme = daily_theme(input.resolve_weekday());

        let caption = self.generate_daily_caption(theme).await?;
        let image_url = self.generate_post_image(theme).await;
        let outcome = self.publish(caption.clone(), image_url.clone()).await;

        Ok(DailyPost {
            theme: theme.to_string(),
            caption,
            image_url,
            outcome,
        })
    }

    #[instrument(skip(self))]
    async fn respond_to_comments(&self) -> Result<CommentReplyReport, CoreError> {
        let media = self.social_publisher.recent_media(RECENT_MEDIA_LIMIT).await?;
        let mut report = CommentReplyReport::default();

        for post in media {
            let comments = match self
                .social_publisher
                .media_comments(post.id.clone(), COMMENTS_PER_MEDIA)
                .await
            {
                Ok(comments) => comments,
                Err(e) => {
                    tracing::warn!(error = %e, media_id = %post.id, "Failed to list comments");
                    continue;
                }
            };

            for comment in comments.into_iter().filter(|c| !c.replied) {
                let reply = match self.generate_comment_reply(&comment.text).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        tracing::warn!(error = %e, comment_id = %comment.id, "Failed to generate reply");
                        report.failed += 1;
                        continue;
                    }
                };

                match self
                    .social_publisher
                    .reply_to_comment(comment.id.clone(), reply)
                    .await
                {
                    Ok(()) => {
                        let preview: String = comment.text.chars().take(50).collect();
                        tracing::info!(comment_id = %comment.id, "Replied to comment: {}...", preview);
                        report.replied += 1;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, comment_id = %comment.id, "Failed to reply to comment");
                        report.failed += 1;
                    }
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::ports::MockChatCompletionClient,
        image::ports::MockImageGenerator,
        social::{
            entities::{MediaSummary, PublishedMedia, SocialComment},
            ports::MockSocialPublisher,
            value_objects::Weekday,
        },
    };

    fn social_service(
        llm: MockChatCompletionClient,
        images: MockImageGenerator,
        social: MockSocialPublisher,
    ) -> impl SocialService {
        Service::new(llm, images, social)
    }

    fn comment(id: &str, text: &str, replied: bool) -> SocialComment {
        SocialComment {
            id: id.to_string(),
            text: text.to_string(),
            replied,
        }
    }

    fn media(id: &str) -> MediaSummary {
        MediaSummary { id: id.to_string() }
    }

    #[tokio::test]
    async fn test_publish_without_image_is_skipped() {
        let mut social = MockSocialPublisher::new();
        social.expect_publish_photo().never();
        let service = social_service(MockChatCompletionClient::new(), MockImageGenerator::new(), social);

        let outcome = service.publish("caption".to_string(), None).await;

        assert_eq!(outcome, PublishOutcome::SkippedNoImage);
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_publish_failure_is_reported_not_raised() {
        let mut social = MockSocialPublisher::new();
        social.expect_publish_photo().times(1).returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("login required".to_string())) })
        });
        let service = social_service(MockChatCompletionClient::new(), MockImageGenerator::new(), social);

        let outcome = service
            .publish("caption".to_string(), Some("https://img".to_string()))
            .await;

        assert!(!outcome.is_success());
        assert!(matches!(outcome, PublishOutcome::Failed { reason } if reason.contains("login required")));
    }

    #[tokio::test]
    async fn test_daily_post_uses_weekday_theme_and_hashtags() {
        let mut llm = MockChatCompletionClient::new();
        llm.expect_complete()
            .withf(|request| {
                request.system_prompt == CONTENT_CREATOR_PERSONA
                    && request.user_prompt == daily_post_prompt("motivational monday")
                    && request.max_tokens == 200
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok("Meat Monday! 🥩".to_string()) }));

        let mut images = MockImageGenerator::new();
        images
            .expect_generate()
            .withf(|prompt| prompt == post_image_prompt("motivational monday"))
            .times(1)
            .returning(|_| Box::pin(async { Ok("https://cdn/monday.png".to_string()) }));

        let mut social = MockSocialPublisher::new();
        social
            .expect_publish_photo()
            .withf(|image_url, caption| {
                image_url == "https://cdn/monday.png"
                    && caption.starts_with("Meat Monday! 🥩\n\n#CarnivoreDiet")
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(PublishedMedia {
                        id: "media-1".to_string(),
                    })
                })
            });

        let post = social_service(llm, images, social)
            .post_daily_content(DailyPostInput {
                weekday: Some(Weekday::Mon),
            })
            .await
            .unwrap();

        assert_eq!(post.theme, "motivational monday");
        assert_eq!(post.caption, with_hashtags("Meat Monday! 🥩"));
        assert_eq!(post.image_url.as_deref(), Some("https://cdn/monday.png"));
        assert_eq!(
            post.outcome,
            PublishOutcome::Published {
                media_id: "media-1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_daily_post_without_image_is_skipped() {
        let mut llm = MockChatCompletionClient::new();
        llm.expect_complete()
            .returning(|_| Box::pin(async { Ok("Friday FAQ".to_string()) }));

        let mut images = MockImageGenerator::new();
        images.expect_generate().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("content policy".to_string())) })
        });

        let mut social = MockSocialPublisher::new();
        social.expect_publish_photo().never();

        let post = social_service(llm, images, social)
            .post_daily_content(DailyPostInput {
                weekday: Some(Weekday::Fri),
            })
            .await
            .unwrap();

        assert_eq!(post.theme, "faq friday");
        assert_eq!(post.image_url, None);
        assert_eq!(post.outcome, PublishOutcome::SkippedNoImage);
    }

    #[tokio::test]
    async fn test_daily_post_caption_failure_is_an_error() {
        let mut llm = MockChatCompletionClient::new();
        llm.expect_complete().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("quota exceeded".to_string())) })
        });

        let mut images = MockImageGenerator::new();
        images.expect_generate().never();

        let result = social_service(llm, images, MockSocialPublisher::new())
            .post_daily_content(DailyPostInput::default())
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_respond_to_comments_skips_replied_and_counts_failures() {
        let mut llm = MockChatCompletionClient::new();
        llm.expect_complete()
            .withf(|request| {
                request.system_prompt == COMMENT_COACH_PERSONA && request.max_tokens == 100
            })
            .times(2)
            .returning(|_| Box::pin(async { Ok("Thanks! 🥩".to_string()) }));

        let mut social = MockSocialPublisher::new();
        social
            .expect_recent_media()
            .withf(|limit| *limit == RECENT_MEDIA_LIMIT)
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![media("m1"), media("m2")]) }));
        social
            .expect_media_comments()
            .withf(|media_id, limit| media_id == "m1" && *limit == COMMENTS_PER_MEDIA)
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(vec![
                        comment("c1", "Love this!", false),
                        comment("c2", "Already answered", true),
                    ])
                })
            });
        social
            .expect_media_comments()
            .withf(|media_id, _| media_id == "m2")
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![comment("c3", "What about fiber?", false)]) }));
        social
            .expect_reply_to_comment()
            .withf(|comment_id, text| comment_id == "c1" && text == "Thanks! 🥩")
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        social
            .expect_reply_to_comment()
            .withf(|comment_id, _| comment_id == "c3")
            .times(1)
            .returning(|_, _| {
                Box::pin(async { Err(CoreError::ExternalServiceError("cannot reply".to_string())) })
            });

        let report = social_service(llm, MockImageGenerator::new(), social)
            .respond_to_comments()
            .await
            .unwrap();

        assert_eq!(report, CommentReplyReport { replied: 1, failed: 1 });
    }

    #[tokio::test]
    async fn test_respond_to_comments_without_credentials_is_an_error() {
        let mut social = MockSocialPublisher::new();
        social
            .expect_recent_media()
            .returning(|_| Box::pin(async { Err(CoreError::NotConfigured("instagram")) }));

        let result = social_service(MockChatCompletionClient::new(), MockImageGenerator::new(), social)
            .respond_to_comments()
            .await;

        assert_eq!(result, Err(CoreError::NotConfigured("instagram")));
    }
}
