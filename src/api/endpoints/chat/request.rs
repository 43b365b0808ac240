use super::public::{ChatReply, ChatRequest, parse_chat_response};
use crate::api::client::ensure_success;
use crate::api::{ApiClient, ApiError};

pub const CHAT_PATH: &str = "/openai/chat";
pub const WEB_SEARCH_PATH: &str = "/openai/web-search";

/// Send a message to the chat backend. Turbo mode routes the message
/// to the web search endpoint instead of plain chat.
pub async fn send_message(
    client: &ApiClient,
    message: &str,
    conversation_id: Option<&str>,
    turbo: bool,
) -> Result<ChatReply, ApiError> {
    try_send_message(client, message, conversation_id, turbo)
        .await
        .inspect_err(|e| tracing::error!("Error sending message: {}", e))
}

async fn try_send_message(
    client: &ApiClient,
    message: &str,
    conversation_id: Option<&str>,
    turbo: bool,
) -> Result<ChatReply, ApiError> {
    let request = ChatRequest::new(message, conversation_id)?;
    let endpoint = if turbo { WEB_SEARCH_PATH } else { CHAT_PATH };

    let response = client
        .post(&client.url(endpoint))
        .json(&request)
        .send()
        .await?;
    let body = ensure_success(response).await?.text().await?;

    Ok(parse_chat_response(&body)?)
}
