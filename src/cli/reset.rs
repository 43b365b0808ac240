use anyhow::Result;

use crate::core::AppConfig;
use crate::store::{FileStorage, Storage};

pub fn run(config: &AppConfig) -> Result<()> {
    let storage = FileStorage::new(config.storage_dir());
    storage.remove_item(&config.storage_name)?;
    println!(
        "Removed {}",
        storage.path_for(&config.storage_name).display()
    );
    Ok(())
}
