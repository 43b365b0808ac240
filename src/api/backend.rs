use async_trait::async_trait;

use super::endpoints::{chat, conversation, history};
use super::{ApiClient, ApiError};
use crate::api::public::chat::ChatReply;
use crate::api::public::conversation::ConversationEntry;
use crate::api::public::history::HistoryItem;

/// The backend calls the controller depends on. `ApiClient` talks
/// HTTP; tests can swap in anything else.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_message(
        &self,
        message: &str,
        conversation_id: Option<&str>,
        turbo: bool,
    ) -> Result<ChatReply, ApiError>;

    async fn get_history(&self) -> Result<Vec<HistoryItem>, ApiError>;

    async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<ConversationEntry>, ApiError>;
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn send_message(
        &self,
        message: &str,
        conversation_id: Option<&str>,
        turbo: bool,
    ) -> Result<ChatReply, ApiError> {
        chat::send_message(self, message, conversation_id, turbo).await
    }

    async fn get_history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        history::get_history(self).await
    }

    async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<ConversationEntry>, ApiError> {
        conversation::get_conversation(self, conversation_id).await
    }
}
