//! One module per backend endpoint

pub mod chat;
pub mod conversation;
pub mod history;
pub mod ollama;
