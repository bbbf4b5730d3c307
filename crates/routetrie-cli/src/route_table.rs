//! Route table files.
//!
//! A route table is a TOML file holding [`Settings`] keys at the top level and
//! one `[[routes]]` entry per route:
//!
//! ```toml
//! log_level = "debug"
//!
//! [routing]
//! duplicate_routes = "reject"
//!
//! [[routes]]
//! pattern = "/users/:id"
//! name = "user-detail"
//! ```
//!
//! The route name is the value stored in the trie.

use std::path::Path;

use serde::Deserialize;

use routetrie_core::{settings_loader, RouteError, RouteResult, Settings};
use routetrie_trie::{Trie, TrieBuilder};

/// One `[[routes]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteEntry {
    /// The route pattern, e.g. `/users/:id`.
    pub pattern: String,
    /// The name reported when the route matches.
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RoutesSection {
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

/// Settings plus the routes declared in a route table file.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Settings read from the same file.
    pub settings: Settings,
    /// Routes in declaration order.
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Parses a route table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::ConfigurationError`] if the TOML is malformed or a
    /// route entry is missing a field.
    pub fn from_toml_str(toml_str: &str) -> RouteResult<Self> {
        let settings = settings_loader::from_toml_str(toml_str)?;
        let section: RoutesSection = toml::from_str(toml_str).map_err(|e| {
            RouteError::ConfigurationError(format!("Failed to parse routes: {e}"))
        })?;
        Ok(Self {
            settings,
            routes: section.routes,
        })
    }

    /// Loads a route table file and applies `ROUTETRIE_*` environment overrides
    /// to its settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> RouteResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RouteError::ConfigurationError(format!(
                "Failed to read route table '{}': {e}",
                path.display()
            ))
        })?;
        let mut table = Self::from_toml_str(&content)?;
        settings_loader::apply_env_overrides(&mut table.settings);
        tracing::debug!(path = %path.display(), routes = table.routes.len(), "loaded route table");
        Ok(table)
    }

    /// Registers every route and returns the first error encountered.
    ///
    /// # Errors
    ///
    /// Returns the first pattern or duplicate error.
    pub fn build_trie(&self) -> RouteResult<Trie<String>> {
        let mut builder = TrieBuilder::with_settings(self.settings.routing.clone());
        for route in &self.routes {
            builder.add_entry(&route.pattern, route.name.clone())?;
        }
        Ok(builder.build())
    }

    /// Registers every route and collects all errors instead of stopping at
    /// the first one.
    pub fn check(&self) -> Vec<RouteError> {
        let mut builder = TrieBuilder::with_settings(self.settings.routing.clone());
        self.routes
            .iter()
            .filter_map(|route| builder.add_entry(&route.pattern, ()).err())
            .collect()
    }
}
