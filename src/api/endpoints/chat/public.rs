//! Request and reply shapes for the send-message endpoint
use serde::Serialize;
use serde_json::Value;

use crate::schema::validate::{self, ValidationError};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    // Always sent, `null` for a conversation that doesn't exist yet
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: &str, conversation_id: Option<&str>) -> Result<Self, ValidationError> {
        validate::non_empty(message, "message", "Message cannot be empty")?;
        Ok(Self {
            message: message.to_string(),
            conversation_id: conversation_id.map(String::from),
        })
    }
}

/// The backend's answer to a sent message.
///
/// The canonical reply is `{"message": ..., "conversation_id": ...}`.
/// Older backends answered with the bare reply text and no id, which
/// is still accepted and comes back with `conversation_id: None`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub message: String,
    pub conversation_id: Option<String>,
}

impl TryFrom<&Value> for ChatReply {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let obj = validate::as_object(value, "")?;
        let message = validate::required_str(obj, "message", "")?;
        let conversation_id = validate::required_str(obj, "conversation_id", "")?;
        Ok(Self {
            message,
            conversation_id: Some(conversation_id),
        })
    }
}

pub fn parse_chat_response(body: &str) -> Result<ChatReply, ValidationError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => ChatReply::try_from(&value),
        Ok(value @ Value::Array(_)) => Err(ValidationError::InvalidType {
            path: String::from("(root)"),
            expected: "object",
            received: validate::type_name(&value),
        }),
        Ok(Value::String(text)) => Ok(ChatReply {
            message: text,
            conversation_id: None,
        }),
        // Anything else is a legacy plain text reply
        _ => Ok(ChatReply {
            message: body.to_string(),
            conversation_id: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_rejects_empty_messages() {
        let err = ChatRequest::new("", None).unwrap_err();
        assert_eq!(err.to_string(), "message: Message cannot be empty");
    }

    #[test]
    fn it_always_sends_a_conversation_id() {
        let req = ChatRequest::new("Hello", None).unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"message": "Hello", "conversation_id": null})
        );

        let req = ChatRequest::new("Hello", Some("c1")).unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"message": "Hello", "conversation_id": "c1"})
        );
    }

    #[test]
    fn it_parses_structured_replies() {
        let reply = parse_chat_response(r#"{"message":"Hi!","conversation_id":"c1"}"#).unwrap();
        assert_eq!(reply.message, "Hi!");
        assert_eq!(reply.conversation_id.as_deref(), Some("c1"));
    }

    #[test]
    fn it_rejects_structured_replies_missing_fields() {
        let err = parse_chat_response(r#"{"message":"Hi!"}"#).unwrap_err();
        assert_eq!(err.path(), "conversation_id");

        let err = parse_chat_response(r#"{"message":1,"conversation_id":"c1"}"#).unwrap_err();
        assert_eq!(err.path(), "message");
    }

    #[test]
    fn it_accepts_legacy_plain_text_replies() {
        let reply = parse_chat_response("Hi there, how can I help?").unwrap();
        assert_eq!(reply.message, "Hi there, how can I help?");
        assert!(reply.conversation_id.is_none());

        let reply = parse_chat_response(r#""quoted""#).unwrap();
        assert_eq!(reply.message, "quoted");
    }

    #[test]
    fn it_rejects_array_replies() {
        assert!(parse_chat_response("[]").is_err());
    }
}
