use anyhow::{Result, bail};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::controller::ChatController;
use crate::core::AppConfig;
use crate::schema::is_turbo_capable;

pub async fn run(config: &AppConfig, message: &str, turbo: bool, model: Option<&str>) -> Result<()> {
    let store = super::open_store(config)?;

    {
        let mut store = store.write().expect("Unable to write chat store");
        if let Some(key) = model {
            store.set_selected_model(key)?;
        }
        if turbo && !is_turbo_capable(store.selected_model_key()) {
            bail!(
                "Turbo mode isn't available for model {}",
                store.selected_model_key()
            );
        }
    }

    // The REPL's saved turbo preference is left as it was
    let controller = ChatController::new(Arc::new(ApiClient::new(&config.api_base_url)), store);
    let reply = controller.send_message_with_turbo(message, turbo).await?;
    println!("{}", reply.message);

    Ok(())
}
