//! Quick chat against the local model. Not part of any conversation,
//! the reply is plain text.
mod request;
pub use request::{QUICK_CHAT_PATH, quick_chat};
