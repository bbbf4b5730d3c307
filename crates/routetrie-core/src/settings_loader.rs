//! Reading [`Settings`] from TOML and the environment.
//!
//! Defaults, then the TOML file, then `ROUTETRIE_*` variables; each layer
//! only replaces the keys it sets.
//!
//! ## Environment variables
//!
//! | Env Var | Setting |
//! |---|---|
//! | `ROUTETRIE_DEBUG` | `debug` |
//! | `ROUTETRIE_LOG_LEVEL` | `log_level` |
//! | `ROUTETRIE_CASE_INSENSITIVE` | `routing.case_insensitive` |
//! | `ROUTETRIE_DUPLICATE_ROUTES` | `routing.duplicate_routes` |
//!
//! Keys the settings do not know about (such as a `[[routes]]` table) are
//! ignored, so a route table file can carry its settings inline.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use routetrie_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("routes.toml").unwrap();
//! ```

use std::path::Path;

use serde_json::Value;

use crate::error::RouteError;
use crate::settings::{DuplicatePolicy, Settings};

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, RouteError> {
    let overrides: Value = toml::from_str(toml_str)
        .map_err(|e| RouteError::ConfigurationError(format!("Invalid settings TOML: {e}")))?;

    // Overlaying onto the serialized defaults lets a nested table such as
    // `[routing]` mention only the keys it changes.
    let mut merged = serde_json::to_value(Settings::default())
        .map_err(|e| RouteError::ConfigurationError(format!("Unserializable defaults: {e}")))?;
    overlay(&mut merged, overrides);

    serde_json::from_value(merged)
        .map_err(|e| RouteError::ConfigurationError(format!("Invalid settings: {e}")))
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, RouteError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        RouteError::ConfigurationError(format!("Cannot read '{}': {e}", path.display()))
    })?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, RouteError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `ROUTETRIE_*` environment variable overrides to a settings struct.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Applies overrides using `lookup` to fetch each variable.
///
/// Boolean values accept "true"/"1"/"yes" (case-insensitive); anything else is
/// `false`. An unrecognised duplicate policy is logged and ignored.
pub fn apply_overrides_from<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("ROUTETRIE_DEBUG") {
        settings.debug = parse_flag(&val);
    }

    if let Some(val) = lookup("ROUTETRIE_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("ROUTETRIE_CASE_INSENSITIVE") {
        settings.routing.case_insensitive = parse_flag(&val);
    }

    if let Some(val) = lookup("ROUTETRIE_DUPLICATE_ROUTES") {
        match val.parse::<DuplicatePolicy>() {
            Ok(policy) => settings.routing.duplicate_routes = policy,
            Err(e) => tracing::warn!(error = %e, "ignoring ROUTETRIE_DUPLICATE_ROUTES"),
        }
    }
}

fn parse_flag(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Recursively writes `overrides` into `base`. Objects merge key by key; any
/// other value replaces what was there.
fn overlay(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => overlay(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
