use anyhow::Result;

use crate::core::AppConfig;
use crate::view::render;

pub fn run(config: &AppConfig) -> Result<()> {
    let store = super::open_store(config)?;
    let store = store.read().expect("Unable to read chat store");
    println!("{}", render::render_models(store.selected_model_key()));
    Ok(())
}
