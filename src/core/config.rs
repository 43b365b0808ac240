use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_STORAGE_NAME: &str = "chat-storage";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage_path: String,
    pub storage_name: String,
}

impl AppConfig {
    pub fn new(api_base_url: &str, storage_path: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            storage_path: storage_path.to_string(),
            storage_name: DEFAULT_STORAGE_NAME.to_string(),
        }
    }

    /// Override the backend base URL, e.g. from a command line flag
    pub fn with_api_base_url(mut self, api_base_url: &str) -> Self {
        self.api_base_url = api_base_url.trim_end_matches('/').to_string();
        self
    }

    /// Directory holding the persisted client state
    pub fn storage_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_base_url = env::var("PARLEY_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let storage_path = env::var("PARLEY_STORAGE_PATH").unwrap_or("./".to_string());

        Self::new(&api_base_url, &storage_path)
    }
}
