//! The slice of client state that survives a restart.
//!
//! Stored as `{"state": {...}, "version": N}`. History and the loading
//! flag are never written, they're always fetched fresh.
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::schema::Message;

pub const PERSIST_VERSION: u32 = 0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub messages: Vec<Message>,
    pub selected_model_key: String,
    pub turbo_mode: bool,
    pub selected_conversation_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Envelope {
    state: PersistedState,
    version: u32,
}

pub fn encode(state: &PersistedState) -> Result<String, StoreError> {
    let envelope = Envelope {
        state: state.clone(),
        version: PERSIST_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

pub fn decode(raw: &str) -> Result<PersistedState, StoreError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != PERSIST_VERSION {
        tracing::warn!(
            "Persisted state version {} differs from {}, loading anyway",
            envelope.version,
            PERSIST_VERSION
        );
    }
    Ok(envelope.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Role;
    use serde_json::Value;

    #[test]
    fn it_round_trips_timestamps() {
        let state = PersistedState {
            messages: vec![
                Message::new(Role::Human, "Hello"),
                Message::new(Role::Ai, "Hi!"),
            ],
            selected_model_key: String::from("001"),
            turbo_mode: true,
            selected_conversation_id: Some(String::from("c1")),
        };

        let raw = encode(&state).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert!(value["state"]["messages"][0]["timestamp"].is_string());
        assert_eq!(value["state"]["selectedModelKey"], "001");
        assert_eq!(value["state"]["selectedConversationId"], "c1");

        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded, state);
        assert_eq!(decoded.messages[0].timestamp, state.messages[0].timestamp);
    }

    #[test]
    fn it_rejects_corrupt_records() {
        assert!(matches!(decode("{not json"), Err(StoreError::Corrupt(_))));
        assert!(matches!(
            decode(r#"{"state": {"messages": []}, "version": 0}"#),
            Err(StoreError::Corrupt(_))
        ));
    }
}
