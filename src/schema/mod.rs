//! Client-side data shapes and the validation helpers used to build
//! them from untrusted values.
pub mod message;
pub use message::{Message, Role};

pub mod model;
pub use model::{
    AVAILABLE_MODELS, DEFAULT_MODEL_KEY, Model, TURBO_MODEL_KEY, find_model, is_turbo_capable,
};

pub mod validate;
pub use validate::ValidationError;
