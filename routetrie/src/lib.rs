//! # routetrie
//!
//! A flat, precedence-ordered path-pattern trie for HTTP-style request routing.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.
//! You can depend on `routetrie` to get everything, or depend on individual
//! crates for finer-grained control.

/// Error types, settings, and logging setup.
pub use routetrie_core as core;

/// Pattern parsing, the trie builder, and path resolution.
pub use routetrie_trie as trie;

/// Route table files and the `routetrie` command.
#[cfg(feature = "cli")]
pub use routetrie_cli as cli;

pub use routetrie_core::{DuplicatePolicy, RouteError, RouteResult, RoutingSettings, Settings};
pub use routetrie_trie::{Parameters, PathElement, RouterPath, Trie, TrieBuilder};

// Third-party re-exports
pub use serde;
pub use tracing;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_build_and_resolve() {
        let mut builder = TrieBuilder::with_settings(RoutingSettings {
            case_insensitive: true,
            ..RoutingSettings::default()
        });
        builder.add_entry("/Docs/{page}.html", 1_u8).unwrap();
        let trie: Trie<u8> = builder.build();

        let (value, params) = trie.resolve("/docs/intro.html").unwrap();
        assert_eq!(*value, 1);
        assert_eq!(params.get("page"), Some("intro"));
    }

    #[test]
    fn test_module_paths() {
        let path: trie::RouterPath = "/a/:b".parse().unwrap();
        assert_eq!(path.parameter_names().collect::<Vec<_>>(), vec!["b"]);
        assert!(matches!(
            "/a{b}c".parse::<RouterPath>(),
            Err(core::RouteError::InvalidPattern { .. })
        ));
    }
}
