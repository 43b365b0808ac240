use anyhow::Result;

use crate::api::ApiClient;
use crate::api::endpoints::ollama;
use crate::core::AppConfig;

pub async fn run(config: &AppConfig, message: &str) -> Result<()> {
    let client = ApiClient::new(&config.api_base_url);
    let reply = ollama::quick_chat(&client, message).await?;
    println!("{}", reply);
    Ok(())
}
