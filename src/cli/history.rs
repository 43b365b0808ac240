use anyhow::Result;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::controller::ChatController;
use crate::core::AppConfig;
use crate::view::render;

pub async fn run(config: &AppConfig) -> Result<()> {
    let store = super::open_store(config)?;
    let controller = ChatController::new(Arc::new(ApiClient::new(&config.api_base_url)), store);

    controller.refresh_history().await?;

    let store = controller.store();
    let store = store.read().expect("Unable to read chat store");
    println!("{}", render::render_history(&store));

    Ok(())
}
