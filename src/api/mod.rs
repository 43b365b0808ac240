pub mod endpoints;
mod backend;
pub use backend::ChatBackend;
mod client;
pub use client::ApiClient;
mod error;
pub use error::ApiError;
pub mod public;
