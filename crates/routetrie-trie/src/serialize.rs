//! Flattening the build-time tree into an immutable [`Trie`].
//!
//! The serializer performs one depth-first pass over the builder's node tree.
//! Every node becomes a `SerializedNode` in pre-order, children sorted by
//! descending [`priority`](PathElement::priority) (ties keep insertion order).
//! Literal and affix text is interned into `constants`, capture names into
//! `parameters`; tokens refer to them by index.
//!
//! # Layout
//!
//! ```text
//! index 0          root (Null), value of the empty path
//! index 1..        top-level nodes, each followed by its subtree
//! last index       DeadEnd sentinel, next_sibling = usize::MAX
//! ```
//!
//! `next_sibling` of a node is the index one past its whole subtree, so the
//! children of node `i` occupy `i + 1 .. nodes[i].next_sibling` and a
//! mismatched branch is skipped in one step.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::Serialize;

use routetrie_core::RoutingSettings;

use crate::builder::BuilderNode;
use crate::element::PathElement;

/// A node token: the element kind with indices into the string tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Null,
    Literal(usize),
    Capture(usize),
    PrefixCapture { parameter: usize, suffix: usize },
    SuffixCapture { prefix: usize, parameter: usize },
    Wildcard,
    PrefixWildcard(usize),
    SuffixWildcard(usize),
    RecursiveWildcard,
    DeadEnd,
}

impl Token {
    const fn kind(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Literal(_) => "literal",
            Self::Capture(_) => "capture",
            Self::PrefixCapture { .. } => "prefix_capture",
            Self::SuffixCapture { .. } => "suffix_capture",
            Self::Wildcard => "wildcard",
            Self::PrefixWildcard(_) => "prefix_wildcard",
            Self::SuffixWildcard(_) => "suffix_wildcard",
            Self::RecursiveWildcard => "recursive_wildcard",
            Self::DeadEnd => "dead_end",
        }
    }
}

/// One entry of the flat node array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SerializedNode {
    pub(crate) value_index: usize,
    pub(crate) token: Token,
    pub(crate) next_sibling: usize,
}

/// An immutable, serialized route trie.
///
/// Built once by [`TrieBuilder::build`](crate::TrieBuilder::build) and then
/// only read. All lookups are plain indexing into fixed arrays, so a `Trie`
/// can be shared (e.g. behind an `Arc`) across any number of threads.
#[derive(Debug, Clone)]
pub struct Trie<V> {
    pub(crate) nodes: Vec<SerializedNode>,
    pub(crate) constants: Vec<Box<str>>,
    pub(crate) parameters: Vec<Box<str>>,
    pub(crate) values: Vec<Option<V>>,
    pub(crate) case_insensitive: bool,
}

impl<V> Trie<V> {
    /// Returns the number of nodes, including the root and the dead-end sentinel.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the trie holds no routes, not even the root.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Returns the number of registered routes.
    pub fn route_count(&self) -> usize {
        self.values.iter().flatten().count()
    }

    /// Returns the registered values in node order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter().flatten()
    }

    /// Returns the deduplicated literal and affix text.
    pub fn constants(&self) -> impl Iterator<Item = &str> {
        self.constants.iter().map(AsRef::as_ref)
    }

    /// Returns the deduplicated capture names.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(AsRef::as_ref)
    }

    /// Returns whether literals are compared ignoring ASCII case.
    pub const fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns a serializable view of the node array.
    pub fn layout(&self) -> TrieLayout<'_> {
        let nodes = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| self.layout_node(index, node))
            .collect();
        TrieLayout {
            nodes,
            constants: self.constants().collect(),
            parameters: self.parameter_names().collect(),
        }
    }

    fn layout_node(&self, index: usize, node: &SerializedNode) -> LayoutNode<'_> {
        let constant = |i: usize| Some(&*self.constants[i]);
        let parameter = |i: usize| Some(&*self.parameters[i]);
        let (text, name) = match node.token {
            Token::Literal(c) | Token::PrefixWildcard(c) | Token::SuffixWildcard(c) => {
                (constant(c), None)
            }
            Token::Capture(p) => (None, parameter(p)),
            Token::PrefixCapture {
                parameter: p,
                suffix: c,
            }
            | Token::SuffixCapture {
                prefix: c,
                parameter: p,
            } => (constant(c), parameter(p)),
            Token::Null | Token::Wildcard | Token::RecursiveWildcard | Token::DeadEnd => {
                (None, None)
            }
        };
        LayoutNode {
            index,
            kind: node.token.kind(),
            text,
            parameter: name,
            terminal: self.values.get(node.value_index).is_some_and(Option::is_some),
            next_sibling: (node.next_sibling != usize::MAX).then_some(node.next_sibling),
        }
    }
}

/// A serializable snapshot of a [`Trie`]'s node array and string tables.
#[derive(Debug, Clone, Serialize)]
pub struct TrieLayout<'a> {
    /// The nodes in array order.
    pub nodes: Vec<LayoutNode<'a>>,
    /// The interned literal and affix text.
    pub constants: Vec<&'a str>,
    /// The interned capture names.
    pub parameters: Vec<&'a str>,
}

/// One node of a [`TrieLayout`], with table indices resolved to text.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutNode<'a> {
    /// Position in the node array.
    pub index: usize,
    /// Token kind, e.g. `"literal"` or `"dead_end"`.
    pub kind: &'static str,
    /// Literal or affix text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    /// Capture name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<&'a str>,
    /// Whether a route ends at this node.
    pub terminal: bool,
    /// Index one past this node's subtree; `None` for the sentinel.
    pub next_sibling: Option<usize>,
}

/// Interns strings, handing back a stable index per distinct value.
#[derive(Default)]
struct StringTable {
    entries: Vec<Box<str>>,
    lookup: HashMap<Box<str>, usize>,
}

impl StringTable {
    fn intern(&mut self, text: &str) -> usize {
        if let Some(&index) = self.lookup.get(text) {
            return index;
        }
        let index = self.entries.len();
        self.entries.push(text.into());
        self.lookup.insert(text.into(), index);
        index
    }
}

struct Serializer<V> {
    nodes: Vec<SerializedNode>,
    constants: StringTable,
    parameters: StringTable,
    values: Vec<Option<V>>,
}

impl<V> Serializer<V> {
    fn tokenize(&mut self, element: &PathElement) -> Token {
        match element {
            PathElement::Null => Token::Null,
            PathElement::Literal(text) => Token::Literal(self.constants.intern(text)),
            PathElement::Capture(name) => Token::Capture(self.parameters.intern(name)),
            PathElement::PrefixCapture { parameter, suffix } => Token::PrefixCapture {
                parameter: self.parameters.intern(parameter),
                suffix: self.constants.intern(suffix),
            },
            PathElement::SuffixCapture { prefix, parameter } => Token::SuffixCapture {
                prefix: self.constants.intern(prefix),
                parameter: self.parameters.intern(parameter),
            },
            PathElement::Wildcard => Token::Wildcard,
            PathElement::PrefixWildcard(suffix) => {
                Token::PrefixWildcard(self.constants.intern(suffix))
            }
            PathElement::SuffixWildcard(prefix) => {
                Token::SuffixWildcard(self.constants.intern(prefix))
            }
            PathElement::RecursiveWildcard => Token::RecursiveWildcard,
        }
    }

    fn serialize_node(&mut self, node: BuilderNode<V>) {
        let BuilderNode {
            key,
            value,
            mut children,
        } = node;

        let value_index = self.values.len();
        self.values.push(value);

        let token = self.tokenize(&key);
        let index = self.nodes.len();
        self.nodes.push(SerializedNode {
            value_index,
            token,
            next_sibling: usize::MAX,
        });

        // Stable: equal priorities keep their registration order.
        children.sort_by_key(|child| Reverse(child.key.priority()));
        for child in children {
            self.serialize_node(child);
        }

        self.nodes[index].next_sibling = self.nodes.len();
    }
}

/// Serializes a build-time tree rooted at `root` into a [`Trie`].
pub(crate) fn serialize<V>(root: BuilderNode<V>, settings: &RoutingSettings) -> Trie<V> {
    let mut serializer = Serializer {
        nodes: Vec::new(),
        constants: StringTable::default(),
        parameters: StringTable::default(),
        values: Vec::new(),
    };
    serializer.serialize_node(root);

    let value_index = serializer.values.len();
    serializer.values.push(None);
    serializer.nodes.push(SerializedNode {
        value_index,
        token: Token::DeadEnd,
        next_sibling: usize::MAX,
    });

    tracing::debug!(
        nodes = serializer.nodes.len(),
        constants = serializer.constants.entries.len(),
        parameters = serializer.parameters.entries.len(),
        "serialized route trie"
    );

    Trie {
        nodes: serializer.nodes,
        constants: serializer.constants.entries,
        parameters: serializer.parameters.entries,
        values: serializer.values,
        case_insensitive: settings.case_insensitive,
    }
}
