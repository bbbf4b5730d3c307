//! # routetrie-core
//!
//! Core types, settings, and error types for the routetrie workspace.
//! This crate has no routing logic of its own and provides the foundation for
//! the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Routing settings and their defaults
//! - [`settings_loader`] - Loading settings from TOML and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{RouteError, RouteResult};
pub use settings::{DuplicatePolicy, RoutingSettings, Settings};
