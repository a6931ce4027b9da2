use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CoachConfig {
    pub llm: LLMConfig,
    pub social: SocialConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub chat_provider: ChatProvider,
    pub image_model: String,
    pub request_timeout: Duration,
}

/// Backend serving chat completions. Image generation always goes to OpenAI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatProvider {
    OpenAi {
        model: String,
    },
    Azure {
        endpoint: String,
        deployment: String,
        api_key: String,
        api_version: String,
    },
}

#[derive(Clone, Debug)]
pub struct SocialConfig {
    pub graph_url: String,
    pub access_token: Option<String>,
    pub account_id: Option<String>,
    pub request_timeout: Duration,
}
