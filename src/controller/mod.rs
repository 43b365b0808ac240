//! Multi-step chat flows. The controller is the only place that both
//! calls the backend and mutates the store.
mod chat;
pub use chat::{APOLOGY_MESSAGE, ChatController, SharedBackend};
