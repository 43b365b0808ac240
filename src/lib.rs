pub mod api;
pub mod cli;
pub mod controller;
pub mod core;
pub mod schema;
pub mod store;
pub mod view;
