//! Shapes for the messages-by-conversation endpoint
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::schema::Role;
use crate::schema::validate::{self, ValidationError};

const ENTRY_TYPES: &[&str] = &["USER", "ASSISTANT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    User,
    Assistant,
}

impl From<EntryType> for Role {
    fn from(kind: EntryType) -> Self {
        match kind {
            EntryType::User => Role::Human,
            EntryType::Assistant => Role::Ai,
        }
    }
}

/// A stored message as the backend returns it
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEntry {
    pub conversation_id: String,
    pub timestamp: String,
    pub content: String,
    pub kind: EntryType,
}

impl ConversationEntry {
    /// The server timestamp as a UTC instant. Accepts RFC 3339 and
    /// zone-less ISO-8601, which is assumed to be UTC.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

pub fn parse_conversation_response(
    value: &Value,
) -> Result<Vec<ConversationEntry>, ValidationError> {
    validate::as_array(value, "")?
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let path = validate::index_path("", idx);
            let obj = validate::as_object(item, &path)?;
            let conversation_id = validate::required_str(obj, "conversationId", &path)?;
            let timestamp = validate::required_str(obj, "timestamp", &path)?;
            let content = validate::required_str(obj, "content", &path)?;
            let kind = match validate::required_enum(obj, "type", &path, ENTRY_TYPES)?.as_str() {
                "USER" => EntryType::User,
                _ => EntryType::Assistant,
            };
            Ok(ConversationEntry {
                conversation_id,
                timestamp,
                content,
                kind,
            })
        })
        .collect()
}
