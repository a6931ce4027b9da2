use tracing::instrument;

use crate::domain::{
    chat::{
        ports::{ChatCompletionClient, ChatService},
        router::Intent,
        value_objects::{ChatInput, CompletionRequest},
    },
    common::{entities::app_errors::CoreError, services::Service},
    diet::content,
    image::ports::ImageGenerator,
    response::entities::ChatReply,
    social::ports::SocialPublisher,
};

const COACH_PERSONA: &str = "You are a carnivore diet coach. Answer questions about carnivore and ketogenic diets clearly and positively, using the reference below.";

impl<LLM, IG, SP> Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    /// Free-form answer for messages no keyword rule matched. If the
    /// completion API fails the general diet explanation is returned.
    async fn answer_complex_query(&self, message: &str) -> String {
        let request = CompletionRequest {
            system_prompt: format!(
                "{COACH_PERSONA}\n\n{}",
                content::explain_carnivore_diet()
            ),
            user_prompt: message.to_string(),
            temperature: 0.3,
            max_tokens: 500,
        };

        match self.llm_client.complete(request).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Free-form responder failed, using diet explanation");
                content::explain_carnivore_diet()
            }
        }
    }
}

impl<LLM, IG, SP> ChatService for Service<LLM, IG, SP>
where
    LLM: ChatCompletionClient,
    IG: ImageGenerator,
    SP: SocialPublisher,
{
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    async fn chat(&self, input: ChatInput) -> Result<ChatReply, CoreError> {
        let decision = self.intent_router.route(&input.message);
        tracing::debug!(intent = ?decision.intent, trigger = ?decision.trigger, "Routed message");

        let body = match decision.intent {
            Intent::Topic(topic) => content::render(topic).text,
            Intent::ComplexQuery => self.answer_complex_query(&input.message).await,
        };

        Ok(self.assembler.chat_reply(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::ports::MockChatCompletionClient, diet::entities::MealPeriod,
        image::ports::MockImageGenerator, response::assembler::SUGGESTED_ACTIONS,
        social::ports::MockSocialPublisher,
    };

    fn input(message: &str) -> ChatInput {
        ChatInput {
            message: message.to_string(),
            user_id: "anonymous".to_string(),
        }
    }

    fn chat_service(llm: MockChatCompletionClient) -> impl ChatService {
        Service::new(llm, MockImageGenerator::new(), MockSocialPublisher::new())
    }

    #[tokio::test]
    async fn test_dinner_question_gets_meal_suggestions() {
        let mut llm = MockChatCompletionClient::new();
        llm.expect_complete().never();

        let reply = chat_service(llm)
            .chat(input("what should I eat for dinner"))
            .await
            .unwrap();

        for meal in content::meals_for(&MealPeriod::Dinner) {
            assert!(reply.response.contains(&format!("• {meal}")));
        }
        assert_eq!(reply.suggested_actions, SUGGESTED_ACTIONS);
    }

    #[tokio::test]
    async fn test_keyword_tie_break_prefers_meals() {
        let reply = chat_service(MockChatCompletionClient::new())
            .chat(input("what food should I avoid"))
            .await
            .unwrap();

        assert_eq!(reply.response, content::suggest_meals(&MealPeriod::Any));
    }

    #[tokio::test]
    async fn test_unmatched_message_is_answered_by_responder() {
        let mut llm = MockChatCompletionClient::new();
        llm.expect_complete()
            .withf(|request| {
                request.user_prompt == "hello there"
                    && request.system_prompt.starts_with(COACH_PERSONA)
                    && request.max_tokens == 500
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok("Carnivore is simple: eat animals.".to_string()) }));

        let reply = chat_service(llm).chat(input("hello there")).await.unwrap();

        assert_eq!(reply.response, "Carnivore is simple: eat animals.");
    }

    #[tokio::test]
    async fn test_responder_failure_falls_back_to_explanation() {
        let mut llm = MockChatCompletionClient::new();
        llm.expect_complete().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let reply = chat_service(llm).chat(input("hello there")).await.unwrap();

        assert_eq!(reply.response, content::explain_carnivore_diet());
    }

    #[tokio::test]
    async fn test_blank_message_goes_to_responder() {
        let mut llm = MockChatCompletionClient::new();
        llm.expect_complete()
            .withf(|request| request.user_prompt == "   ")
            .times(1)
            .returning(|_| {
                Box::pin(async { Err(CoreError::ExternalServiceError("empty prompt".to_string())) })
            });

        let reply = chat_service(llm).chat(input("   ")).await.unwrap();

        assert_eq!(reply.response, content::explain_carnivore_diet());
        assert_eq!(reply.suggested_actions, SUGGESTED_ACTIONS);
    }
}
