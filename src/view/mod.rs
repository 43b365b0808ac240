//! Presentation of the store and translation of raw user input into
//! intents. Nothing in here talks to the backend.
pub mod composer;
pub use composer::{KeyAction, can_submit, input_height_px, key_action};

pub mod intent;
pub use intent::{Intent, parse_intent, resolve_history_target};

pub mod render;
