use std::future::Future;

use crate::domain::{
    chat::value_objects::{ChatInput, CompletionRequest},
    common::entities::app_errors::CoreError,
    response::entities::ChatReply,
};

/// Chat-completion API (OpenAI or Azure OpenAI)
#[cfg_attr(test, mockall::automock)]
pub trait ChatCompletionClient: Send + Sync {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait ChatService: Send + Sync {
    /// Answers a free-text message. Keyword matches are served from fixed
    /// content; anything else goes to the chat-completion API.
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;
}
