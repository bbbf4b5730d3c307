//! Parameters extracted while resolving a path.

use std::fmt;
use std::str::FromStr;

use routetrie_core::{RouteError, RouteResult};

/// Captured parameters for one resolved path.
///
/// Names borrow from the [`Trie`](crate::Trie) and values borrow from the
/// request path, so building a `Parameters` allocates only its own vector.
///
/// # Examples
///
/// ```
/// use routetrie_trie::TrieBuilder;
///
/// let mut builder = TrieBuilder::new();
/// builder.add_entry("/users/:id/files/**", ()).unwrap();
/// let trie = builder.build();
///
/// let (_, params) = trie.resolve("/users/42/files/a/b.txt").unwrap();
/// assert_eq!(params.get("id"), Some("42"));
/// assert_eq!(params.get_as::<u32>("id"), Some(42));
/// assert_eq!(params.get_catch_all(), Some("a/b.txt"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters<'a> {
    captures: Vec<(&'a str, &'a str)>,
    catch_all: Option<&'a str>,
}

/// A restore point used when the resolver backtracks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint<'a> {
    captures: usize,
    catch_all: Option<&'a str>,
}

impl<'a> Parameters<'a> {
    /// Creates an empty parameter set.
    pub const fn new() -> Self {
        Self {
            captures: Vec::new(),
            catch_all: None,
        }
    }

    /// Returns the value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.captures
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Returns the text consumed by a recursive wildcard (`**`), if any.
    pub const fn get_catch_all(&self) -> Option<&'a str> {
        self.catch_all
    }

    /// Parses the value captured for `name`, returning `None` if it is
    /// missing or does not parse.
    pub fn get_as<T: FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|value| value.parse().ok())
    }

    /// Parses the value captured for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingParameter`] if nothing was captured for
    /// `name`, or [`RouteError::InvalidParameter`] if the value does not parse.
    pub fn require<T: FromStr>(&self, name: &str) -> RouteResult<T> {
        let value = self
            .get(name)
            .ok_or_else(|| RouteError::MissingParameter(name.to_string()))?;
        value.parse().map_err(|_| RouteError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Iterates over `(name, value)` pairs in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.captures.iter().copied()
    }

    /// Returns the number of named captures (the catch-all is not counted).
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Returns `true` if there are no named captures and no catch-all.
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty() && self.catch_all.is_none()
    }

    pub(crate) fn push(&mut self, name: &'a str, value: &'a str) {
        self.captures.push((name, value));
    }

    pub(crate) fn set_catch_all(&mut self, value: &'a str) {
        self.catch_all = Some(value);
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            captures: self.captures.len(),
            catch_all: self.catch_all,
        }
    }

    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint<'a>) {
        self.captures.truncate(checkpoint.captures);
        self.catch_all = checkpoint.catch_all;
    }
}

impl fmt::Debug for Parameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        map.entries(self.captures.iter().copied());
        if let Some(catch_all) = self.catch_all {
            map.entry(&"**", &catch_all);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Parameters<'static> {
        let mut params = Parameters::new();
        params.push("id", "42");
        params.push("slug", "hello-world");
        params
    }

    #[test]
    fn test_get() {
        let params = sample();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("slug"), Some("hello-world"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_get_as() {
        let params = sample();
        assert_eq!(params.get_as::<i64>("id"), Some(42));
        assert_eq!(params.get_as::<i64>("slug"), None);
        assert_eq!(params.get_as::<i64>("missing"), None);
    }

    #[test]
    fn test_require() {
        let params = sample();
        assert_eq!(params.require::<u8>("id").unwrap(), 42);
        assert!(matches!(
            params.require::<u8>("nope"),
            Err(RouteError::MissingParameter(ref n)) if n == "nope"
        ));
        assert!(matches!(
            params.require::<u8>("slug"),
            Err(RouteError::InvalidParameter { ref value, .. }) if value == "hello-world"
        ));
    }

    #[test]
    fn test_rollback_restores_state() {
        let mut params = sample();
        let checkpoint = params.checkpoint();
        params.push("extra", "x");
        params.set_catch_all("a/b");
        params.rollback(checkpoint);
        assert_eq!(params, sample());
        assert_eq!(params.get_catch_all(), None);
    }

    #[test]
    fn test_is_empty_counts_catch_all() {
        let mut params = Parameters::new();
        assert!(params.is_empty());
        params.set_catch_all("x");
        assert!(!params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_debug_output() {
        let mut params = sample();
        params.set_catch_all("rest/of/path");
        let debug = format!("{params:?}");
        assert!(debug.contains("\"id\": \"42\""));
        assert!(debug.contains("rest/of/path"));
    }
}
