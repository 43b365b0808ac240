use thiserror::Error;

use crate::schema::ValidationError;

/// Everything that can go wrong talking to the chat backend. None of
/// these are retried.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request or the response didn't have the expected shape
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The backend answered with a non-2xx status
    #[error("API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// Connection, TLS or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A JSON endpoint returned something that isn't JSON
    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
