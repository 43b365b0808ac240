pub mod public;
mod request;
pub use request::{CHAT_PATH, WEB_SEARCH_PATH, send_message};
