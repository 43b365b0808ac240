use anyhow::Result;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::controller::ChatController;
use crate::core::AppConfig;
use crate::view::render;

/// Load a conversation the same way picking it from the history list
/// does, making it the active conversation, then print it
pub async fn run(config: &AppConfig, conversation_id: &str) -> Result<()> {
    let store = super::open_store(config)?;
    let controller = ChatController::new(Arc::new(ApiClient::new(&config.api_base_url)), store);

    controller.load_conversation(conversation_id).await?;

    let store = controller.store();
    let store = store.read().expect("Unable to read chat store");
    println!("{}", render::render_messages(&store));

    Ok(())
}
