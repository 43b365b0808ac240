use crate::api::client::ensure_success;
use crate::api::{ApiClient, ApiError};

pub const QUICK_CHAT_PATH: &str = "/ollama/chat";

pub async fn quick_chat(client: &ApiClient, message: &str) -> Result<String, ApiError> {
    try_quick_chat(client, message)
        .await
        .inspect_err(|e| tracing::error!("Error sending message to Ollama: {}", e))
}

async fn try_quick_chat(client: &ApiClient, message: &str) -> Result<String, ApiError> {
    let url = client.url(&format!(
        "{}?message={}",
        QUICK_CHAT_PATH,
        urlencoding::encode(message)
    ));
    let response = client.get(&url).send().await?;
    let text = ensure_success(response).await?.text().await?;

    Ok(text)
}
