//! Incremental trie construction.
//!
//! [`TrieBuilder`] owns a tree of nodes keyed by [`PathElement`].
//! Patterns that share a prefix share nodes. The builder is single-threaded
//! and consumed by [`TrieBuilder::build`], which hands the tree to the
//! serializer and returns the immutable [`Trie`].

use routetrie_core::{DuplicatePolicy, RouteError, RouteResult, RoutingSettings};

use crate::element::PathElement;
use crate::pattern::RouterPath;
use crate::serialize::{self, Trie};

/// A node of the owned build-time tree.
#[derive(Debug)]
pub(crate) struct BuilderNode<V> {
    pub(crate) key: PathElement,
    pub(crate) value: Option<V>,
    pub(crate) children: Vec<BuilderNode<V>>,
}

impl<V> BuilderNode<V> {
    fn new(key: PathElement) -> Self {
        Self {
            key,
            value: None,
            children: Vec::new(),
        }
    }

    /// Finds the child keyed by `key`, creating it if missing.
    fn child_mut(&mut self, key: PathElement) -> &mut Self {
        let position = match self.children.iter().position(|c| c.key == key) {
            Some(position) => position,
            None => {
                self.children.push(Self::new(key));
                self.children.len() - 1
            }
        };
        &mut self.children[position]
    }
}

/// Collects route patterns and their values, then builds a [`Trie`].
///
/// # Examples
///
/// ```
/// use routetrie_trie::TrieBuilder;
///
/// let mut builder = TrieBuilder::new();
/// builder.add_entry("/users/:id", "user-detail").unwrap();
/// builder.add_entry("/users/list", "user-list").unwrap();
/// let trie = builder.build();
///
/// let (value, _) = trie.resolve("/users/list").unwrap();
/// assert_eq!(*value, "user-list");
/// ```
#[derive(Debug)]
pub struct TrieBuilder<V> {
    root: BuilderNode<V>,
    settings: RoutingSettings,
    routes: usize,
}

impl<V> Default for TrieBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieBuilder<V> {
    /// Creates an empty builder with default settings.
    pub fn new() -> Self {
        Self::with_settings(RoutingSettings::default())
    }

    /// Creates an empty builder with the given routing settings.
    pub fn with_settings(settings: RoutingSettings) -> Self {
        Self {
            root: BuilderNode::new(PathElement::Null),
            settings,
            routes: 0,
        }
    }

    /// Returns the routing settings this builder was created with.
    pub const fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Returns the number of distinct routes registered so far.
    pub const fn len(&self) -> usize {
        self.routes
    }

    /// Returns `true` if no routes have been registered.
    pub const fn is_empty(&self) -> bool {
        self.routes == 0
    }

    /// Parses `pattern` and registers `value` for it.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] if the pattern is malformed, or
    /// [`RouteError::DuplicateRoute`] if it is already registered and the
    /// duplicate policy is [`DuplicatePolicy::Reject`].
    pub fn add_entry(&mut self, pattern: &str, value: V) -> RouteResult<()> {
        let path = RouterPath::parse(pattern)?;
        self.add_path(path, value)
    }

    /// Registers `value` for an already-parsed path.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateRoute`] if the path is already registered
    /// and the duplicate policy is [`DuplicatePolicy::Reject`].
    pub fn add_path(&mut self, path: RouterPath, value: V) -> RouteResult<()> {
        let description = path.to_string();
        let fold = self.settings.case_insensitive;

        let mut node = &mut self.root;
        for element in path.into_elements() {
            let key = if fold { element.fold_case() } else { element };
            node = node.child_mut(key);
        }

        if node.value.is_some() {
            match self.settings.duplicate_routes {
                DuplicatePolicy::Reject => return Err(RouteError::DuplicateRoute(description)),
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(route = %description, "route registered twice; replacing value");
                }
            }
        } else {
            self.routes += 1;
            tracing::debug!(route = %description, "registered route");
        }
        node.value = Some(value);
        Ok(())
    }

    /// Serializes the tree into an immutable [`Trie`].
    pub fn build(self) -> Trie<V> {
        serialize::serialize(self.root, &self.settings)
    }
}
