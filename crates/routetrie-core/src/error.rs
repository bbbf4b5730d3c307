//! Core error types for routetrie.
//!
//! This module provides the error enum [`RouteError`] that covers every
//! build-time and configuration failure. Request-time resolution never fails
//! with an error: a path that matches no route is reported as `None` by the
//! resolver, not as a [`RouteError`].

use thiserror::Error;

/// The primary error type for routetrie.
///
/// Pattern and registration errors are produced while the route table is being
/// built. Parameter errors come from typed access to captured values after a
/// successful resolution.
#[derive(Error, Debug)]
pub enum RouteError {
    // ── Build-time errors ────────────────────────────────────────────

    /// A route pattern could not be parsed.
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as it was registered.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The same pattern was registered twice while duplicates are rejected.
    #[error("Duplicate route: {0}")]
    DuplicateRoute(String),

    // ── Parameter access ─────────────────────────────────────────────

    /// A required parameter was not captured by the matched route.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// A captured parameter could not be converted to the requested type.
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// The captured text that failed to convert.
        value: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value or route table is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RouteError {
    /// Shorthand for building an [`RouteError::InvalidPattern`].
    pub fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error was raised while registering routes.
    pub const fn is_build_error(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. } | Self::DuplicateRoute(_))
    }
}

/// A convenience type alias for `Result<T, RouteError>`.
pub type RouteResult<T> = Result<T, RouteError>;
