use super::public::{HistoryItem, parse_history_response};
use crate::api::client::{ensure_success, read_json};
use crate::api::{ApiClient, ApiError};

pub const HISTORY_PATH: &str = "/openai/history";

/// Fetch the list of previous conversations
pub async fn get_history(client: &ApiClient) -> Result<Vec<HistoryItem>, ApiError> {
    try_get_history(client)
        .await
        .inspect_err(|e| tracing::error!("Error fetching chat history: {}", e))
}

async fn try_get_history(client: &ApiClient) -> Result<Vec<HistoryItem>, ApiError> {
    let response = client.get(&client.url(HISTORY_PATH)).send().await?;
    let value = read_json(ensure_success(response).await?).await?;

    Ok(parse_history_response(&value)?)
}
