use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

use crate::domain::{
    chat::{ports::ChatCompletionClient, value_objects::CompletionRequest},
    common::{ChatProvider, LLMConfig, entities::app_errors::CoreError},
    image::ports::ImageGenerator,
};

const IMAGE_SIZE: &str = "1024x1024";
const IMAGE_QUALITY: &str = "standard";

/// OpenAI REST client for chat completions and image generation. Chat
/// completions can be routed to an Azure OpenAI deployment instead.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    chat_provider: ChatProvider,
    image_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest {
    model: String,
    prompt: String,
    size: &'static str,
    quality: &'static str,
    n: u8,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        Url::parse(&config.openai_base_url).map_err(|e| {
            CoreError::Invalid(format!(
                "invalid OpenAI base url '{}': {}",
                config.openai_base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build OpenAI HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.openai_api_key,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            chat_provider: config.chat_provider,
            image_model: config.image_model,
            client,
        })
    }

    fn chat_url(&self) -> Result<Url, CoreError> {
        let url = match &self.chat_provider {
            ChatProvider::OpenAi { .. } => {
                Url::parse(&format!("{}/chat/completions", self.base_url))
            }
            ChatProvider::Azure {
                endpoint,
                deployment,
                api_version,
                ..
            } => Url::parse_with_params(
                &format!(
                    "{}/openai/deployments/{}/chat/completions",
                    endpoint.trim_end_matches('/'),
                    deployment
                ),
                &[("api-version", api_version)],
            ),
        };

        url.map_err(|e| CoreError::Invalid(format!("invalid chat completion url: {}", e)))
    }

    fn chat_request(&self, request: CompletionRequest) -> ChatCompletionRequest {
        let model = match &self.chat_provider {
            ChatProvider::OpenAi { model } => Some(model.clone()),
            ChatProvider::Azure { .. } => None,
        };

        ChatCompletionRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.chat_provider {
            ChatProvider::OpenAi { .. } => builder.bearer_auth(&self.api_key),
            ChatProvider::Azure { api_key, .. } => builder.header("api-key", api_key),
        }
    }

    async fn call_api<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        api: &str,
    ) -> Result<T, CoreError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} request failed: {}", api, e);
            CoreError::ExternalServiceError(format!("{} error: {}", api, e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("{} error: {} - {}", api, status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "{} returned error: {} - {}",
                api, status, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse {} response: {}", api, e);
            CoreError::ExternalServiceError(format!("Failed to parse {} response: {}", api, e))
        })
    }
}

fn first_message(response: ChatCompletionResponse) -> Result<String, CoreError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
}

fn first_image_url(response: ImageGenerationResponse) -> Result<String, CoreError> {
    response
        .data
        .into_iter()
        .next()
        .and_then(|d| d.url)
        .ok_or_else(|| CoreError::ExternalServiceError("No image in response".to_string()))
}

impl ChatCompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let url = self.chat_url()?;
        let body = self.chat_request(request);

        let builder = self.authorize(self.client.post(url)).json(&body);
        let response: ChatCompletionResponse = self.call_api(builder, "Chat completion API").await?;

        first_message(response)
    }
}

impl ImageGenerator for OpenAiClient {
    async fn generate(&self, prompt: String) -> Result<String, CoreError> {
        let body = ImageGenerationRequest {
            model: self.image_model.clone(),
            prompt,
            size: IMAGE_SIZE,
            quality: IMAGE_QUALITY,
            n: 1,
        };

        let builder = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body);
        let response: ImageGenerationResponse =
            self.call_api(builder, "Image generation API").await?;

        first_image_url(response)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config(chat_provider: ChatProvider) -> LLMConfig {
        LLMConfig {
            openai_api_key: "sk-test".to_string(),
            openai_base_url: "https://api.openai.com/v1/".to_string(),
            chat_provider,
            image_model: "dall-e-3".to_string(),
            request_timeout: Duration::from_secs(5),
        }
    }

    fn azure() -> ChatProvider {
        ChatProvider::Azure {
            endpoint: "https://coach.openai.azure.com/".to_string(),
            deployment: "gpt-4".to_string(),
            api_key: "azure-key".to_string(),
            api_version: "2024-02-01".to_string(),
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            temperature: 0.3,
            max_tokens: 100,
        }
    }

    #[test]
    fn test_openai_chat_url() {
        let client = OpenAiClient::new(config(ChatProvider::OpenAi {
            model: "gpt-4".to_string(),
        }))
        .unwrap();

        assert_eq!(
            client.chat_url().unwrap().as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_azure_chat_url() {
        let client = OpenAiClient::new(config(azure())).unwrap();

        assert_eq!(
            client.chat_url().unwrap().as_str(),
            "https://coach.openai.azure.com/openai/deployments/gpt-4/chat/completions?api-version=2024-02-01"
        );
    }

    #[test]
    fn test_chat_request_body() {
        let openai = OpenAiClient::new(config(ChatProvider::OpenAi {
            model: "gpt-4".to_string(),
        }))
        .unwrap();
        let body = serde_json::to_value(openai.chat_request(request())).unwrap();

        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "user");
        assert_eq!(body["max_tokens"], 100);

        let azure = OpenAiClient::new(config(azure())).unwrap();
        let body = serde_json::to_value(azure.chat_request(request())).unwrap();
        assert!(body.get("model").is_none());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let mut cfg = config(ChatProvider::OpenAi {
            model: "gpt-4".to_string(),
        });
        cfg.openai_base_url = "not a url".to_string();

        assert!(matches!(OpenAiClient::new(cfg), Err(CoreError::Invalid(_))));
    }

    #[test]
    fn test_response_extraction() {
        let chat: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Eat meat."}}]}"#,
        )
        .unwrap();
        assert_eq!(first_message(chat).unwrap(), "Eat meat.");

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(first_message(empty).is_err());

        let image: ImageGenerationResponse =
            serde_json::from_str(r#"{"created":1,"data":[{"url":"https://img/1.png"}]}"#).unwrap();
        assert_eq!(first_image_url(image).unwrap(), "https://img/1.png");
    }
}
