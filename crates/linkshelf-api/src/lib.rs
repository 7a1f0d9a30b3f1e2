//! # linkshelf-api
//!
//! HTTP server for linkshelf: bookmark CRUD with tag and text filtering,
//! plus user lookup.
//!
//! The binary in `main.rs` wires configuration, logging and storage; this
//! library exposes the router so tests can serve it in-process.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;

pub use app::build_router;
pub use config::{ApiConfig, DatabaseType};
pub use error::ApiError;
pub use state::{AppState, Repositories};
