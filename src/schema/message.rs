use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Ai,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Human => write!(f, "human"),
            Role::Ai => write!(f, "ai"),
        }
    }
}

/// A single turn in the conversation. Messages are never edited
/// after creation, only appended or cleared wholesale.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Self::new_with_timestamp(role, content, Utc::now())
    }

    pub fn new_with_timestamp(role: Role, content: &str, timestamp: DateTime<Utc>) -> Self {
        Message {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.to_string(),
            timestamp,
        }
    }
}
