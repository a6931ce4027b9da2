use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::instrument;
use url::Url;

use crate::domain::{
    common::{SocialConfig, entities::app_errors::CoreError},
    social::{
        entities::{MediaSummary, PublishedMedia, SocialComment},
        ports::SocialPublisher,
    },
};

/// Instagram Graph API client for a business account.
///
/// Photos are published in two steps: a media container is created from the
/// image URL, then the container is published.
#[derive(Debug, Clone)]
pub struct InstagramGraphClient {
    graph_url: String,
    credentials: Option<Credentials>,
    client: Client,
}

#[derive(Debug, Clone)]
struct Credentials {
    access_token: String,
    account_id: String,
}

#[derive(Debug, Deserialize)]
struct IdResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct MediaNode {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CommentNode {
    id: String,
    #[serde(default)]
    text: String,
    replies: Option<Page<serde_json::Value>>,
}

impl From<CommentNode> for SocialComment {
    fn from(node: CommentNode) -> Self {
        Self {
            id: node.id,
            text: node.text,
            replied: node.replies.is_some_and(|r| !r.data.is_empty()),
        }
    }
}

impl InstagramGraphClient {
    pub fn new(config: SocialConfig) -> Result<Self, CoreError> {
        Url::parse(&config.graph_url).map_err(|e| {
            CoreError::Invalid(format!("invalid graph url '{}': {}", config.graph_url, e))
        })?;

        let credentials = match (config.access_token, config.account_id) {
            (Some(access_token), Some(account_id)) => Some(Credentials {
                access_token,
                account_id,
            }),
            _ => {
                tracing::warn!("Instagram credentials missing, social publishing disabled");
                None
            }
        };

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Instagram HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            graph_url: config.graph_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        })
    }

    fn credentials(&self) -> Result<&Credentials, CoreError> {
        self.credentials
            .as_ref()
            .ok_or(CoreError::NotConfigured("instagram"))
    }

    fn node_url(&self, node: &str, edge: &str) -> String {
        format!("{}/{}/{}", self.graph_url, node, edge)
    }

    async fn call_graph<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, CoreError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Instagram Graph API request failed: {}", e);
            CoreError::ExternalServiceError(format!("Instagram API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Instagram Graph API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Instagram API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse Instagram response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse Instagram response: {}", e))
        })
    }
}

impl SocialPublisher for InstagramGraphClient {
    #[instrument(skip(self, caption))]
    async fn publish_photo(
        &self,
        image_url: String,
        caption: String,
    ) -> Result<PublishedMedia, CoreError> {
        let credentials = self.credentials()?;

        let container: IdResponse = self
            .call_graph(
                self.client
                    .post(self.node_url(&credentials.account_id, "media"))
                    .form(&[
                        ("image_url", image_url.as_str()),
                        ("caption", caption.as_str()),
                        ("access_token", credentials.access_token.as_str()),
                    ]),
            )
            .await?;

        tracing::debug!(container_id = %container.id, "Created media container");

        let published: IdResponse = self
            .call_graph(
                self.client
                    .post(self.node_url(&credentials.account_id, "media_publish"))
                    .form(&[
                        ("creation_id", container.id.as_str()),
                        ("access_token", credentials.access_token.as_str()),
                    ]),
            )
            .await?;

        Ok(PublishedMedia { id: published.id })
    }

    async fn recent_media(&self, limit: usize) -> Result<Vec<MediaSummary>, CoreError> {
        let credentials = self.credentials()?;

        let page: Page<MediaNode> = self
            .call_graph(
                self.client
                    .get(self.node_url(&credentials.account_id, "media"))
                    .query(&[
                        ("fields", "id".to_string()),
                        ("limit", limit.to_string()),
                        ("access_token", credentials.access_token.clone()),
                    ]),
            )
            .await?;

        Ok(page
            .data
            .into_iter()
            .map(|m| MediaSummary { id: m.id })
            .collect())
    }

    async fn media_comments(
        &self,
        media_id: String,
        limit: usize,
    ) -> Result<Vec<SocialComment>, CoreError> {
        let credentials = self.credentials()?;

        let page: Page<CommentNode> = self
            .call_graph(
                self.client
                    .get(self.node_url(&media_id, "comments"))
                    .query(&[
                        ("fields", "id,text,replies{id}".to_string()),
                        ("limit", limit.to_string()),
                        ("access_token", credentials.access_token.clone()),
                    ]),
            )
            .await?;

        Ok(page.data.into_iter().map(SocialComment::from).collect())
    }

    async fn reply_to_comment(&self, comment_id: String, text: String) -> Result<(), CoreError> {
        let credentials = self.credentials()?;

        let _reply: IdResponse = self
            .call_graph(
                self.client
                    .post(self.node_url(&comment_id, "replies"))
                    .form(&[
                        ("message", text.as_str()),
                        ("access_token", credentials.access_token.as_str()),
                    ]),
            )
            .await?;

        Ok(())
    }
}
