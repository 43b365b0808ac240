//! Shapes for the conversation history endpoint
use serde_json::Value;

use crate::schema::validate::{self, ValidationError};

/// Summary of a past conversation shown in the history list
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub id: String,
    pub title: String,
}

pub fn parse_history_response(value: &Value) -> Result<Vec<HistoryItem>, ValidationError> {
    validate::as_array(value, "")?
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let path = validate::index_path("", idx);
            let obj = validate::as_object(item, &path)?;
            Ok(HistoryItem {
                id: validate::required_str(obj, "id", &path)?,
                title: validate::required_str(obj, "title", &path)?,
            })
        })
        .collect()
}
