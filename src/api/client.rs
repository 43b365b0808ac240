use reqwest::Response;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::ApiError;

/// Thin wrapper around a `reqwest::Client` bound to the backend's
/// base URL. Cloning is cheap and shares the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
    }

    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
    }
}

/// Turn a non-2xx response into `ApiError::Http` carrying the body text.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    tracing::error!("API Error Response: {}", body);
    Err(ApiError::Http {
        status: status.as_u16(),
        body,
    })
}

pub(crate) async fn read_json(response: Response) -> Result<Value, ApiError> {
    let body = response.text().await?;
    let value = serde_json::from_str(&body)?;
    Ok(value)
}
