//! # routetrie-trie
//!
//! A path-pattern trie for HTTP-style request routing.
//!
//! Routes are registered once at startup with [`TrieBuilder::add_entry`] and
//! frozen with [`TrieBuilder::build`] into a flat, immutable [`Trie`]. Each
//! request path is then resolved with [`Trie::resolve`], which returns the
//! registered value and the extracted [`Parameters`], or `None`.
//!
//! - [`pattern`]: Parsing route patterns into [`PathElement`]s
//! - [`builder`]: The owned build-time tree
//! - [`serialize`]: Flattening the tree into the node array and string tables
//! - [`resolver`]: Matching with precedence, backtracking and catch-alls
//! - [`parameters`]: Captured values for one resolution
//!
//! # Precedence
//!
//! Siblings are tried in a fixed order, most specific first: prefix/suffix
//! captures, literals, prefix/suffix wildcards, captures, wildcards, and last
//! recursive wildcards. When a more specific branch fails deeper down, the
//! resolver backtracks into the next sibling.
//!
//! # Examples
//!
//! ```
//! use routetrie_trie::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new();
//! builder.add_entry("/users/list", "list").unwrap();
//! builder.add_entry("/users/:id", "detail").unwrap();
//! builder.add_entry("/static/**/index.html", "index").unwrap();
//! let trie = builder.build();
//!
//! let (value, params) = trie.resolve("/users/42").unwrap();
//! assert_eq!(*value, "detail");
//! assert_eq!(params.get("id"), Some("42"));
//!
//! let (value, params) = trie.resolve("/static/a/b/index.html").unwrap();
//! assert_eq!(*value, "index");
//! assert_eq!(params.get_catch_all(), Some("a/b"));
//!
//! assert!(trie.resolve("/nothing/here").is_none());
//! ```

pub mod builder;
pub mod element;
pub mod parameters;
pub mod pattern;
pub mod resolver;
pub mod serialize;

pub use builder::TrieBuilder;
pub use element::PathElement;
pub use parameters::Parameters;
pub use pattern::RouterPath;
pub use serialize::{LayoutNode, Trie, TrieLayout};
