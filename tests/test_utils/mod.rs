//! Test utilities for integration tests
use std::sync::Arc;

use tempfile::TempDir;

use parley::api::ApiClient;
use parley::controller::ChatController;
use parley::core::AppConfig;
use parley::store::{ChatStore, FileStorage, SharedStore};

pub struct TestApp {
    pub controller: ChatController,
    pub store: SharedStore,
    pub config: AppConfig,
    // Held so the storage directory outlives the test
    pub _dir: TempDir,
}

/// Builds a controller talking to `api_url` with its state persisted
/// in a fresh temporary directory.
pub fn test_app(api_url: &str) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = AppConfig::new(api_url, dir.path().to_str().unwrap());
    let store = reopen_store(&config);
    let controller = ChatController::new(Arc::new(ApiClient::new(api_url)), store.clone());

    TestApp {
        controller,
        store,
        config,
        _dir: dir,
    }
}

/// Load the persisted state again as a new process would
pub fn reopen_store(config: &AppConfig) -> SharedStore {
    let storage = Arc::new(FileStorage::new(config.storage_dir()));
    ChatStore::with_storage(storage, &config.storage_name)
        .expect("Failed to open store")
        .into_shared()
}
