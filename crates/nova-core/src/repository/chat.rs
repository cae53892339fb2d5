//! Chat message repository trait definition.

use nova_types::chat::ChatMessage;
use nova_types::error::RepositoryError;
use nova_types::user::UserId;

pub trait ChatRepository: Send + Sync {
    fn save_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<ChatMessage, RepositoryError>> + Send;

    /// The `limit` most recent turns, returned oldest first.
    fn recent_messages(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Delete every turn the user owns. Returns the number removed.
    fn clear(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
