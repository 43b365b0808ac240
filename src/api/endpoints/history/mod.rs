pub mod public;
mod request;
pub use request::{HISTORY_PATH, get_history};
