//! Client state container.
//!
//! All mutations are synchronous whole-field replacements. Mutating a
//! persisted field (messages, model, turbo flag, conversation id)
//! writes the persisted slice back to storage straight away.
use std::sync::{Arc, RwLock};

use crate::api::public::history::HistoryItem;
use crate::schema::{DEFAULT_MODEL_KEY, Message, Role, find_model, is_turbo_capable};

pub mod persist;
pub use persist::PersistedState;

mod storage;
pub use storage::{FileStorage, MemoryStorage, Storage, StoreError};

pub type SharedStore = Arc<RwLock<ChatStore>>;

pub struct ChatStore {
    messages: Vec<Message>,
    input_value: String,
    selected_model_key: String,
    turbo_mode: bool,
    history: Vec<HistoryItem>,
    is_loading_history: bool,
    selected_conversation_id: Option<String>,
    storage: Option<(Arc<dyn Storage>, String)>,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input_value: String::new(),
            selected_model_key: DEFAULT_MODEL_KEY.to_string(),
            turbo_mode: false,
            history: Vec::new(),
            is_loading_history: false,
            selected_conversation_id: None,
            storage: None,
        }
    }
}

impl ChatStore {
    /// A store that lives only in memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from the named record and keep it up to date from
    /// then on. A missing or unreadable record starts from the initial
    /// state; only storage I/O errors are returned.
    pub fn with_storage(storage: Arc<dyn Storage>, name: &str) -> Result<Self, StoreError> {
        let mut store = Self::default();
        if let Some(raw) = storage.get_item(name)? {
            match persist::decode(&raw) {
                Ok(state) => store.rehydrate(state),
                Err(e) => tracing::warn!("Discarding persisted chat state {}: {}", name, e),
            }
        }
        store.storage = Some((storage, name.to_string()));
        Ok(store)
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    fn rehydrate(&mut self, state: PersistedState) {
        self.messages = state.messages;
        self.selected_conversation_id = state.selected_conversation_id;
        if find_model(&state.selected_model_key).is_some() {
            self.selected_model_key = state.selected_model_key;
        } else {
            tracing::warn!(
                "Ignoring unknown persisted model {}",
                state.selected_model_key
            );
        }
        self.turbo_mode = state.turbo_mode && is_turbo_capable(&self.selected_model_key);
    }

    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            messages: self.messages.clone(),
            selected_model_key: self.selected_model_key.clone(),
            turbo_mode: self.turbo_mode,
            selected_conversation_id: self.selected_conversation_id.clone(),
        }
    }

    fn persist(&self) {
        let Some((storage, name)) = &self.storage else {
            return;
        };
        let result = persist::encode(&self.snapshot()).and_then(|raw| storage.set_item(name, &raw));
        if let Err(e) = result {
            tracing::warn!("Failed to persist chat state: {}", e);
        }
    }

    // Accessors

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn selected_model_key(&self) -> &str {
        &self.selected_model_key
    }

    pub fn turbo_mode(&self) -> bool {
        self.turbo_mode
    }

    /// Turbo only takes effect for the turbo-capable model
    pub fn effective_turbo(&self) -> bool {
        self.turbo_mode && is_turbo_capable(&self.selected_model_key)
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn is_loading_history(&self) -> bool {
        self.is_loading_history
    }

    pub fn selected_conversation_id(&self) -> Option<&str> {
        self.selected_conversation_id.as_deref()
    }

    // Mutations

    pub fn add_message(&mut self, role: Role, content: &str) -> Message {
        let message = Message::new(role, content);
        self.push_message(message.clone());
        message
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
        self.persist();
    }

    /// Append several messages at once, persisting a single time
    pub fn append_messages(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
        self.persist();
    }

    pub fn set_input_value(&mut self, value: &str) {
        self.input_value = value.to_string();
    }

    /// Switch models. Turbo is switched off when the new model can't
    /// use it.
    pub fn set_selected_model(&mut self, key: &str) -> Result<(), StoreError> {
        if find_model(key).is_none() {
            return Err(StoreError::UnknownModel(key.to_string()));
        }
        self.selected_model_key = key.to_string();
        if !is_turbo_capable(key) {
            self.turbo_mode = false;
        }
        self.persist();
        Ok(())
    }

    /// Flip turbo mode and return the new value. Always off for models
    /// that aren't turbo-capable.
    pub fn toggle_turbo(&mut self) -> bool {
        self.turbo_mode = !self.turbo_mode && is_turbo_capable(&self.selected_model_key);
        self.persist();
        self.turbo_mode
    }

    pub fn set_history(&mut self, history: Vec<HistoryItem>) {
        self.history = history;
    }

    pub fn set_loading_history(&mut self, loading: bool) {
        self.is_loading_history = loading;
    }

    pub fn set_conversation_id(&mut self, id: Option<&str>) {
        self.selected_conversation_id = id.map(String::from);
        self.persist();
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.persist();
    }
}
