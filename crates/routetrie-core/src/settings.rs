//! Settings for routetrie.
//!
//! This module provides the [`Settings`] struct, which holds the logging
//! configuration and the [`RoutingSettings`] that control how route tables are
//! built. Every field has a default so a minimal (or empty) configuration file
//! is valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// What happens when the same pattern is registered more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// The later registration replaces the earlier value.
    #[default]
    Overwrite,
    /// The later registration fails with [`RouteError::DuplicateRoute`].
    Reject,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => f.write_str("overwrite"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(RouteError::ConfigurationError(format!(
                "Unknown duplicate route policy '{other}' (expected 'overwrite' or 'reject')"
            ))),
        }
    }
}

/// Settings that change how patterns are matched and registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingSettings {
    /// Compare literal segments and affixes ignoring ASCII case.
    pub case_insensitive: bool,
    /// Policy for registering a pattern that is already present.
    pub duplicate_routes: DuplicatePolicy,
}

/// The complete set of settings.
///
/// # Examples
///
/// ```
/// use routetrie_core::settings::{DuplicatePolicy, Settings};
///
/// let settings = Settings::default();
/// assert!(!settings.debug);
/// assert_eq!(settings.log_level, "info");
/// assert_eq!(settings.routing.duplicate_routes, DuplicatePolicy::Overwrite);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (human-readable logs).
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level or filter directive (e.g. "info", "routetrie_trie=trace").
    pub log_level: String,

    // ── Routing ──────────────────────────────────────────────────────

    /// Route table construction options.
    pub routing: RoutingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
            routing: RoutingSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "info");
        assert!(!settings.routing.case_insensitive);
        assert_eq!(settings.routing.duplicate_routes, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn test_duplicate_policy_from_str() {
        assert_eq!("reject".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Reject);
        assert_eq!(
            " Overwrite ".parse::<DuplicatePolicy>().unwrap(),
            DuplicatePolicy::Overwrite
        );
        assert!("ignore".parse::<DuplicatePolicy>().is_err());
    }

    #[test]
    fn test_duplicate_policy_display_round_trips() {
        for policy in [DuplicatePolicy::Overwrite, DuplicatePolicy::Reject] {
            assert_eq!(policy.to_string().parse::<DuplicatePolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_settings_serde_lowercase_policy() {
        let mut settings = Settings::default();
        settings.routing.duplicate_routes = DuplicatePolicy::Reject;
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["routing"]["duplicate_routes"], "reject");
    }
}
