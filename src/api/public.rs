//! Public API types

// Re-export public types from each endpoint

pub mod chat {
    pub use crate::api::endpoints::chat::public::*;
}

pub mod conversation {
    pub use crate::api::endpoints::conversation::public::*;
}

pub mod history {
    pub use crate::api::endpoints::history::public::*;
}
