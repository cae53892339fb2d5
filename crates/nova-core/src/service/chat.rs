//! Conversation handling: history, posting turns, clearing.

use std::sync::Arc;

use nova_types::analytics::AnalyticsEvent;
use nova_types::chat::{
    CHAT_HISTORY_LIMIT, ChatExchange, ChatMessage, MessageRole, PostChatRequest, PostChatResponse,
};
use nova_types::error::ServiceError;
use nova_types::llm::Message;
use nova_types::user::UserId;

use crate::llm::dispatcher::{AssistantDispatcher, HISTORY_WINDOW};
use crate::repository::analytics::AnalyticsRepository;
use crate::repository::chat::ChatRepository;
use crate::service::analytics::AnalyticsService;

pub struct ChatService<C: ChatRepository, A: AnalyticsRepository> {
    repo: C,
    dispatcher: Arc<AssistantDispatcher>,
    analytics: Arc<AnalyticsService<A>>,
}

impl<C: ChatRepository, A: AnalyticsRepository> ChatService<C, A> {
    pub fn new(
        repo: C,
        dispatcher: Arc<AssistantDispatcher>,
        analytics: Arc<AnalyticsService<A>>,
    ) -> Self {
        Self {
            repo,
            dispatcher,
            analytics,
        }
    }

    /// The most recent turns, oldest first.
    pub async fn history(&self, user_id: &UserId) -> Result<Vec<ChatMessage>, ServiceError> {
        self.repo
            .recent_messages(user_id, CHAT_HISTORY_LIMIT)
            .await
            .map_err(|e| ServiceError::from_repository("chat message", e))
    }

    /// Store a turn. A user turn is answered by the dispatcher and the reply
    /// is stored alongside it.
    pub async fn post(
        &self,
        user_id: &UserId,
        request: PostChatRequest,
    ) -> Result<PostChatResponse, ServiceError> {
        let (role, content) = request.validate()?;

        if role == MessageRole::Assistant {
            let stored = self.save(ChatMessage::new(user_id.clone(), role, content)).await?;
            return Ok(PostChatResponse::Single(stored));
        }

        // History is read before the new turn is stored so it does not appear twice.
        let history: Vec<Message> = self
            .repo
            .recent_messages(user_id, HISTORY_WINDOW as u32)
            .await
            .map_err(|e| ServiceError::from_repository("chat message", e))?
            .iter()
            .map(Message::from)
            .collect();

        let user_message = self
            .save(ChatMessage::new(user_id.clone(), MessageRole::User, content))
            .await?;

        let reply = self.dispatcher.respond(content, &history).await;
        tracing::debug!(user_id = %user_id, source = ?reply.source, "Generated assistant reply");

        let ai_message = self
            .save(ChatMessage::new(user_id.clone(), MessageRole::Assistant, reply.text))
            .await?;

        self.analytics.record(user_id, AnalyticsEvent::Chat).await;

        Ok(PostChatResponse::Exchange(ChatExchange {
            user_message,
            ai_message,
        }))
    }

    pub async fn clear(&self, user_id: &UserId) -> Result<u64, ServiceError> {
        let removed = self
            .repo
            .clear(user_id)
            .await
            .map_err(|e| ServiceError::from_repository("chat message", e))?;
        tracing::info!(user_id = %user_id, removed, "Cleared conversation");
        Ok(removed)
    }

    async fn save(&self, message: ChatMessage) -> Result<ChatMessage, ServiceError> {
        self.repo
            .save_message(&message)
            .await
            .map_err(|e| ServiceError::from_repository("chat message", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::llm::dispatcher::DEFAULT_ATTEMPT_TIMEOUT;
    use crate::llm::patterns;
    use crate::repository::analytics::AnalyticsRepository as _;
    use crate::testing::{CallLog, InMemoryAnalytics, InMemoryChat, MockOutcome, MockProvider};

    fn service_with(
        dispatcher: AssistantDispatcher,
    ) -> (ChatService<InMemoryChat, InMemoryAnalytics>, InMemoryAnalytics) {
        let analytics = InMemoryAnalytics::default();
        let svc = ChatService::new(
            InMemoryChat::default(),
            Arc::new(dispatcher),
            Arc::new(AnalyticsService::new(analytics.clone())),
        );
        (svc, analytics)
    }

    fn post(content: &str) -> PostChatRequest {
        PostChatRequest {
            content: content.into(),
            role: None,
        }
    }

    fn scripted(reply: &str) -> (AssistantDispatcher, CallLog) {
        let provider = MockProvider::new("groq", MockOutcome::Reply(reply.into()));
        let calls = provider.calls();
        (
            AssistantDispatcher::new(vec![BoxLlmProvider::new(provider)], DEFAULT_ATTEMPT_TIMEOUT),
            calls,
        )
    }

    #[tokio::test]
    async fn test_user_turn_gets_reply_and_both_are_stored() {
        let (svc, analytics) = service_with(AssistantDispatcher::local_only());
        let user = UserId::new();

        let PostChatResponse::Exchange(exchange) = svc.post(&user, post("Hello")).await.unwrap()
        else {
            panic!("expected an exchange");
        };
        assert_eq!(exchange.user_message.content, "Hello");
        let ai = exchange.ai_message;
        assert_eq!(ai.role, MessageRole::Assistant);
        assert_eq!(ai.content, patterns::GREETING);

        let history = svc.history(&user).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, MessageRole::User);
        assert_eq!(history[1].role, MessageRole::Assistant);

        let counters = analytics.get(&user).await.unwrap().unwrap();
        assert_eq!(counters.total_chats, 1);
    }

    #[tokio::test]
    async fn test_empty_message_never_reaches_dispatcher() {
        let (dispatcher, calls) = scripted("unused");
        let (svc, _) = service_with(dispatcher);
        let user = UserId::new();

        let err = svc.post(&user, post("   ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref v) if v.field == "content"));
        assert_eq!(calls.count(), 0);
        assert!(svc.history(&user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prior_turns_are_sent_as_history() {
        let (dispatcher, calls) = scripted("sure");
        let (svc, _) = service_with(dispatcher);
        let user = UserId::new();

        svc.post(&user, post("first")).await.unwrap();
        svc.post(&user, post("second")).await.unwrap();

        let sent = calls.last_request().unwrap();
        let contents: Vec<&str> = sent.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "sure", "second"]);
    }

    #[tokio::test]
    async fn test_assistant_turn_is_stored_without_dispatch() {
        let (dispatcher, calls) = scripted("unused");
        let (svc, _) = service_with(dispatcher);
        let user = UserId::new();

        let req = PostChatRequest {
            content: "Welcome back!".into(),
            role: Some(MessageRole::Assistant),
        };
        let PostChatResponse::Single(stored) = svc.post(&user, req).await.unwrap() else {
            panic!("expected a single message");
        };
        assert_eq!(stored.role, MessageRole::Assistant);
        assert_eq!(calls.count(), 0);
    }

    #[tokio::test]
    async fn test_history_is_per_user_and_clear_only_touches_owner() {
        let (svc, _) = service_with(AssistantDispatcher::local_only());
        let alice = UserId::new();
        let bob = UserId::new();

        svc.post(&alice, post("hi")).await.unwrap();
        svc.post(&bob, post("hey")).await.unwrap();

        assert_eq!(svc.clear(&alice).await.unwrap(), 2);
        assert!(svc.history(&alice).await.unwrap().is_empty());
        assert_eq!(svc.history(&bob).await.unwrap().len(), 2);
    }
}
