//! # routetrie-cli
//!
//! Developer tooling for routetrie route tables.
//!
//! This crate provides:
//!
//! - **Route tables** - Loading settings and `[[routes]]` from a TOML file
//! - **Commands** - `check`, `resolve`, and `dump` over a loaded table
//!
//! ## Quick Start
//!
//! ```rust
//! use routetrie_cli::route_table::RouteTable;
//!
//! let table = RouteTable::from_toml_str(r#"
//!     [[routes]]
//!     pattern = "/users/:id"
//!     name = "user-detail"
//! "#).unwrap();
//!
//! let trie = table.build_trie().unwrap();
//! let (name, params) = trie.resolve("/users/42").unwrap();
//! assert_eq!(name, "user-detail");
//! assert_eq!(params.get("id"), Some("42"));
//! ```

pub mod commands;
pub mod route_table;

pub use commands::{run, Cli, Command};
pub use route_table::{RouteEntry, RouteTable};
