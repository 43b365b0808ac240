use super::public::{ConversationEntry, parse_conversation_response};
use crate::api::client::{ensure_success, read_json};
use crate::api::{ApiClient, ApiError};

pub const CONVERSATION_PATH: &str = "/openai/data";

/// Fetch every stored message of one conversation
pub async fn get_conversation(
    client: &ApiClient,
    conversation_id: &str,
) -> Result<Vec<ConversationEntry>, ApiError> {
    try_get_conversation(client, conversation_id)
        .await
        .inspect_err(|e| tracing::error!("Error fetching chat messages: {}", e))
}

async fn try_get_conversation(
    client: &ApiClient,
    conversation_id: &str,
) -> Result<Vec<ConversationEntry>, ApiError> {
    let url = client.url(&format!(
        "{}/{}",
        CONVERSATION_PATH,
        urlencoding::encode(conversation_id)
    ));
    let response = client.get(&url).send().await?;
    let value = read_json(ensure_success(response).await?).await?;

    Ok(parse_conversation_response(&value)?)
}
