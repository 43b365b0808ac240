pub mod public;
mod request;
pub use request::{CONVERSATION_PATH, get_conversation};
