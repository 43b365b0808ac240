use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::api::public::chat::{ChatReply, ChatRequest};
use crate::api::public::history::HistoryItem;
use crate::api::{ApiError, ChatBackend};
use crate::schema::{Message, Role, is_turbo_capable};
use crate::store::SharedStore;

/// Shown in place of a reply when sending fails
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

pub type SharedBackend = Arc<dyn ChatBackend>;

pub struct ChatController {
    backend: SharedBackend,
    store: SharedStore,
    // Sending and loading a conversation both rewrite the message
    // list so only one of them runs at a time
    flow: Mutex<()>,
}

impl ChatController {
    pub fn new(backend: SharedBackend, store: SharedStore) -> Self {
        Self {
            backend,
            store,
            flow: Mutex::new(()),
        }
    }

    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// True while a send or load is in flight
    pub fn is_busy(&self) -> bool {
        self.flow.try_lock().is_err()
    }

    /// Send a message and record the reply.
    ///
    /// The human message is appended before the backend is called and
    /// stays there even if the call fails. On failure a fixed apology
    /// is appended and the original error is returned so the caller
    /// can reset its own state. The first reply of a new conversation
    /// adopts the server's conversation id and refreshes the history.
    pub async fn send_message(&self, text: &str) -> Result<ChatReply, ApiError> {
        self.send(text, None).await
    }

    /// Like `send_message` but with turbo chosen for this message only,
    /// leaving the stored preference alone. Still off for models that
    /// can't use it.
    pub async fn send_message_with_turbo(
        &self,
        text: &str,
        turbo: bool,
    ) -> Result<ChatReply, ApiError> {
        self.send(text, Some(turbo)).await
    }

    async fn send(&self, text: &str, turbo: Option<bool>) -> Result<ChatReply, ApiError> {
        let _flow = self.flow.lock().await;

        ChatRequest::new(text, None)?;

        let (conversation_id, turbo) = {
            let mut store = self.store.write().expect("Unable to write chat store");
            store.add_message(Role::Human, text);
            let turbo = match turbo {
                Some(turbo) => turbo && is_turbo_capable(store.selected_model_key()),
                None => store.effective_turbo(),
            };
            (store.selected_conversation_id().map(String::from), turbo)
        };

        let reply = match self
            .backend
            .send_message(text, conversation_id.as_deref(), turbo)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Failed to send message: {}", e);
                self.store
                    .write()
                    .expect("Unable to write chat store")
                    .add_message(Role::Ai, APOLOGY_MESSAGE);
                return Err(e);
            }
        };

        let is_new_conversation = {
            let mut store = self.store.write().expect("Unable to write chat store");
            store.add_message(Role::Ai, &reply.message);
            match (&conversation_id, &reply.conversation_id) {
                (None, Some(new_id)) => {
                    store.set_conversation_id(Some(new_id));
                    true
                }
                _ => false,
            }
        };

        if is_new_conversation {
            tracing::debug!("Started conversation {:?}", reply.conversation_id);
            // The message went through, a stale history list isn't
            // worth failing the send over
            if let Err(e) = self.refresh_history().await {
                tracing::warn!("Failed to refresh history: {}", e);
            }
        }

        Ok(reply)
    }

    /// Replace the message list with a stored conversation, keeping
    /// the server's order.
    pub async fn load_conversation(&self, conversation_id: &str) -> Result<(), ApiError> {
        let _flow = self.flow.lock().await;

        {
            let mut store = self.store.write().expect("Unable to write chat store");
            store.clear_messages();
            store.set_conversation_id(Some(conversation_id));
        }

        let entries = self
            .backend
            .get_conversation(conversation_id)
            .await
            .inspect_err(|e| tracing::error!("Failed to load conversation: {}", e))?;

        let messages: Vec<Message> = entries
            .iter()
            .map(|entry| {
                let timestamp = entry.parsed_timestamp().unwrap_or_else(|| {
                    tracing::warn!("Unparseable timestamp {:?}, using now", entry.timestamp);
                    Utc::now()
                });
                Message::new_with_timestamp(entry.kind.into(), &entry.content, timestamp)
            })
            .collect();

        tracing::debug!(
            "Loaded {} messages for conversation {}",
            messages.len(),
            conversation_id
        );
        self.store
            .write()
            .expect("Unable to write chat store")
            .append_messages(messages);

        Ok(())
    }

    pub async fn get_history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        self.backend
            .get_history()
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch history: {}", e))
    }

    /// Fetch the history into the store, flagging it as loading while
    /// the request is in flight.
    pub async fn refresh_history(&self) -> Result<(), ApiError> {
        self.store
            .write()
            .expect("Unable to write chat store")
            .set_loading_history(true);

        let result = self.get_history().await;

        let mut store = self.store.write().expect("Unable to write chat store");
        store.set_loading_history(false);
        store.set_history(result?);
        Ok(())
    }

    /// Start over with an empty conversation that the server doesn't
    /// know about yet
    pub async fn new_conversation(&self) {
        let _flow = self.flow.lock().await;
        let mut store = self.store.write().expect("Unable to write chat store");
        store.clear_messages();
        store.set_conversation_id(None);
    }
}
