use std::time::Duration;

use anyhow::{Context, anyhow};
use carnivore_core::domain::common::{ChatProvider, CoachConfig, LLMConfig, SocialConfig};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "carnivore-coach", version, about = "Carnivore diet coaching API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub openai: OpenAiArgs,

    #[command(flatten)]
    pub instagram: InstagramArgs,

    #[command(flatten)]
    pub admin: AdminArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix added in front of every route, e.g. `/coach`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProvider {
    Openai,
    Azure,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OpenAiArgs {
    /// Backend for chat completions; images always use OpenAI
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value = "openai")]
    pub provider: LlmProvider,

    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    #[arg(long = "openai-chat-model", env = "OPENAI_CHAT_MODEL", default_value = "gpt-4")]
    pub chat_model: String,

    #[arg(long = "openai-image-model", env = "OPENAI_IMAGE_MODEL", default_value = "dall-e-3")]
    pub image_model: String,

    #[arg(long = "azure-openai-endpoint", env = "AZURE_OPENAI_ENDPOINT")]
    pub azure_endpoint: Option<String>,

    #[arg(long = "azure-openai-deployment", env = "AZURE_OPENAI_DEPLOYMENT")]
    pub azure_deployment: Option<String>,

    #[arg(long = "azure-openai-api-key", env = "AZURE_OPENAI_API_KEY", hide_env_values = true)]
    pub azure_api_key: Option<String>,

    #[arg(
        long = "azure-openai-api-version",
        env = "AZURE_OPENAI_API_VERSION",
        default_value = "2024-02-01"
    )]
    pub azure_api_version: String,

    /// Request timeout in seconds
    #[arg(id = "openai_timeout_secs", long = "openai-timeout", env = "OPENAI_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct InstagramArgs {
    #[arg(long = "instagram-access-token", env = "INSTAGRAM_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[arg(long = "instagram-account-id", env = "INSTAGRAM_ACCOUNT_ID")]
    pub account_id: Option<String>,

    #[arg(
        long = "instagram-graph-url",
        env = "INSTAGRAM_GRAPH_URL",
        default_value = "https://graph.facebook.com/v19.0"
    )]
    pub graph_url: String,

    #[arg(id = "instagram_timeout_secs", long = "instagram-timeout", env = "INSTAGRAM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AdminArgs {
    /// Bearer token required by the social automation routes. Those routes
    /// reject every request when unset.
    #[arg(long = "admin-token", env = "ADMIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl OpenAiArgs {
    fn chat_provider(&self) -> Result<ChatProvider, anyhow::Error> {
        match self.provider {
            LlmProvider::Openai => Ok(ChatProvider::OpenAi {
                model: self.chat_model.clone(),
            }),
            LlmProvider::Azure => Ok(ChatProvider::Azure {
                endpoint: self
                    .azure_endpoint
                    .clone()
                    .context("AZURE_OPENAI_ENDPOINT is required with the azure provider")?,
                deployment: self
                    .azure_deployment
                    .clone()
                    .context("AZURE_OPENAI_DEPLOYMENT is required with the azure provider")?,
                api_key: self
                    .azure_api_key
                    .clone()
                    .context("AZURE_OPENAI_API_KEY is required with the azure provider")?,
                api_version: self.azure_api_version.clone(),
            }),
        }
    }
}

impl TryFrom<&Args> for CoachConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        if args.openai.api_key.trim().is_empty() {
            return Err(anyhow!("OPENAI_API_KEY must not be empty"));
        }

        Ok(CoachConfig {
            llm: LLMConfig {
                openai_api_key: args.openai.api_key.clone(),
                openai_base_url: args.openai.base_url.clone(),
                chat_provider: args.openai.chat_provider()?,
                image_model: args.openai.image_model.clone(),
                request_timeout: Duration::from_secs(args.openai.timeout_secs),
            },
            social: SocialConfig {
                graph_url: args.instagram.graph_url.clone(),
                access_token: args.instagram.access_token.clone(),
                account_id: args.instagram.account_id.clone(),
                request_timeout: Duration::from_secs(args.instagram.timeout_secs),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["carnivore-coach", "--openai-api-key", "sk-test"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_openai_provider_config() {
        let args = parse(&["--openai-chat-model", "gpt-4o"]);

        let config = CoachConfig::try_from(&args).unwrap();

        assert_eq!(
            config.llm.chat_provider,
            ChatProvider::OpenAi {
                model: "gpt-4o".to_string()
            }
        );
        assert_eq!(config.llm.image_model, "dall-e-3");
        assert_eq!(config.llm.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_azure_provider_requires_endpoint() {
        let args = parse(&["--llm-provider", "azure"]);

        assert!(CoachConfig::try_from(&args).is_err());
    }

    #[test]
    fn test_azure_provider_config() {
        let args = parse(&[
            "--llm-provider",
            "azure",
            "--azure-openai-endpoint",
            "https://coach.openai.azure.com",
            "--azure-openai-deployment",
            "gpt-4",
            "--azure-openai-api-key",
            "azure-key",
        ]);

        let config = CoachConfig::try_from(&args).unwrap();

        assert!(matches!(
            config.llm.chat_provider,
            ChatProvider::Azure { ref deployment, ref api_version, .. }
                if deployment == "gpt-4" && api_version == "2024-02-01"
        ));
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = parse(&["--allowed-origins", "http://a.test,http://b.test"]);

        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }
}
