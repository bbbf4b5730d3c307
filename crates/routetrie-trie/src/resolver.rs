//! Resolving request paths against a serialized [`Trie`].
//!
//! Resolution walks the flat node array one path component at a time:
//!
//! 1. **Scan** the current sibling group in priority order until a node's
//!    token accepts the component. A rejected node is skipped together with
//!    its subtree via `next_sibling`. Reaching the end of the group or the
//!    dead-end sentinel means the group is exhausted.
//! 2. **Descend** into the matched node's children with the next component.
//!    If there are no components left, the node must carry a value.
//! 3. **Backtrack** when the descent fails: undo any captures it made and
//!    resume the scan at the matched node's next sibling.
//!
//! A recursive wildcard (`**`) consumes the current component and then
//! peeks each following component against the wildcard's children. The
//! first component a child accepts ends the span and resolution continues
//! from that child; components no child accepts are added to the span. If the
//! components run out first, the wildcard node itself must carry a value. The
//! consumed span is reported as the catch-all. Each component is peeked at
//! most once per wildcard.
//!
//! Resolution never fails with an error: a path that matches nothing yields
//! `None`. Recursion depth is bounded by the number of path components.

use std::ops::Range;

use routetrie_core::logging::resolve_span;

use crate::parameters::Parameters;
use crate::serialize::{SerializedNode, Token, Trie};

/// Iterator over the non-empty `/`-separated components of a path, yielding
/// each component with its byte offset.
#[derive(Debug, Clone)]
struct Components<'a> {
    path: &'a str,
    position: usize,
}

/// A path component and where it starts in the path.
#[derive(Debug, Clone, Copy)]
struct Component<'a> {
    start: usize,
    text: &'a str,
}

impl Component<'_> {
    const fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

impl<'a> Components<'a> {
    const fn new(path: &'a str) -> Self {
        Self { path, position: 0 }
    }
}

impl<'a> Iterator for Components<'a> {
    type Item = Component<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.path.as_bytes();
        while self.position < bytes.len() && bytes[self.position] == b'/' {
            self.position += 1;
        }
        if self.position >= bytes.len() {
            return None;
        }
        let start = self.position;
        let end = self.path[start..]
            .find('/')
            .map_or(self.path.len(), |offset| start + offset);
        self.position = end;
        Some(Component {
            start,
            text: &self.path[start..end],
        })
    }
}

/// State shared by one resolution: the trie and the path being resolved.
struct Resolution<'a, V> {
    trie: &'a Trie<V>,
    path: &'a str,
}

impl<V> Trie<V> {
    /// Resolves `path` to the value registered for the best-matching pattern.
    ///
    /// `path` must already be percent-decoded and stripped of any query
    /// string. Empty components are ignored, so `""`, `"/"` and `"//"` all
    /// resolve to the root pattern.
    ///
    /// Returns `None` when no pattern matches. Repeated calls with the same
    /// path return equal results.
    pub fn resolve<'a>(&'a self, path: &'a str) -> Option<(&'a V, Parameters<'a>)> {
        let _span = resolve_span(path).entered();
        let resolution = Resolution { trie: self, path };
        let mut parameters = Parameters::new();
        let mut components = Components::new(path);

        let value_index = match components.next() {
            None => Some(self.nodes[0].value_index),
            Some(first) => {
                // The top-level group ends at the dead-end sentinel.
                let group = 1..self.nodes[0].next_sibling;
                resolution.descend(components, first, group, &mut parameters)
            }
        };

        if let Some(value) = value_index.and_then(|index| self.values[index].as_ref()) {
            tracing::trace!(captures = parameters.len(), "matched");
            Some((value, parameters))
        } else {
            tracing::trace!("no route matched");
            None
        }
    }

    /// Returns `true` if [`resolve`](Self::resolve) would find a route for `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    fn text_eq(&self, a: &str, b: &str) -> bool {
        if self.case_insensitive {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    }

    /// Splits `component` into `(head, suffix)` if it ends with `suffix`.
    fn strip_suffix<'c>(&self, component: &'c str, suffix: &str) -> Option<&'c str> {
        let split = component.len().checked_sub(suffix.len())?;
        let tail = component.get(split..)?;
        self.text_eq(tail, suffix).then(|| &component[..split])
    }

    /// Splits `component` into `(prefix, tail)` if it starts with `prefix`.
    fn strip_prefix<'c>(&self, component: &'c str, prefix: &str) -> Option<&'c str> {
        let head = component.get(..prefix.len())?;
        self.text_eq(head, prefix).then(|| &component[prefix.len()..])
    }
}

impl<'a, V> Resolution<'a, V> {
    fn node(&self, index: usize) -> &'a SerializedNode {
        &self.trie.nodes[index]
    }

    fn has_value(&self, node: &SerializedNode) -> bool {
        self.trie.values[node.value_index].is_some()
    }

    /// Scans siblings from `group.start` for the first node that accepts
    /// `component`, binding any capture into `parameters`.
    fn match_component(
        &self,
        component: &'a str,
        group: Range<usize>,
        parameters: &mut Parameters<'a>,
    ) -> Option<usize> {
        let trie = self.trie;
        let mut index = group.start;

        while index < group.end {
            let node = self.node(index);
            let matched = match node.token {
                Token::DeadEnd => return None,
                Token::Null => false,
                Token::Literal(c) => trie.text_eq(&trie.constants[c], component),
                Token::Capture(p) => {
                    parameters.push(&trie.parameters[p], component);
                    true
                }
                Token::PrefixCapture { parameter, suffix } => {
                    match trie.strip_suffix(component, &trie.constants[suffix]) {
                        Some(value) if !value.is_empty() => {
                            parameters.push(&trie.parameters[parameter], value);
                            true
                        }
                        _ => false,
                    }
                }
                Token::SuffixCapture { prefix, parameter } => {
                    match trie.strip_prefix(component, &trie.constants[prefix]) {
                        Some(value) if !value.is_empty() => {
                            parameters.push(&trie.parameters[parameter], value);
                            true
                        }
                        _ => false,
                    }
                }
                Token::Wildcard | Token::RecursiveWildcard => true,
                Token::PrefixWildcard(suffix) => {
                    trie.strip_suffix(component, &trie.constants[suffix]).is_some()
                }
                Token::SuffixWildcard(prefix) => {
                    trie.strip_prefix(component, &trie.constants[prefix]).is_some()
                }
            };

            if matched {
                return Some(index);
            }
            index = node.next_sibling;
        }

        None
    }

    /// Matches `component` within `group` and resolves `rest` below it,
    /// backtracking through less specific siblings on failure. Returns the
    /// value index of the terminal node.
    fn descend(
        &self,
        rest: Components<'a>,
        component: Component<'a>,
        group: Range<usize>,
        parameters: &mut Parameters<'a>,
    ) -> Option<usize> {
        let mut start = group.start;

        while start < group.end {
            let checkpoint = parameters.checkpoint();
            let index = self.match_component(component.text, start..group.end, parameters)?;
            let node = self.node(index);

            let found = if node.token == Token::RecursiveWildcard {
                self.consume_recursive(rest.clone(), component, index, parameters)
            } else {
                let mut remaining = rest.clone();
                match remaining.next() {
                    None => self.has_value(node).then_some(node.value_index),
                    Some(next) => {
                        self.descend(remaining, next, index + 1..node.next_sibling, parameters)
                    }
                }
            };

            if found.is_some() {
                return found;
            }
            parameters.rollback(checkpoint);
            start = node.next_sibling;
        }

        None
    }

    /// Grows the catch-all span of the recursive wildcard at `index`, which
    /// has already consumed `first`.
    ///
    /// Each following component is peeked against the wildcard's children.
    /// The first component a child accepts ends the span for good: resolution
    /// continues from there and a failure below is not retried with a longer
    /// span. Components no child accepts join the span.
    fn consume_recursive(
        &self,
        mut rest: Components<'a>,
        first: Component<'a>,
        index: usize,
        parameters: &mut Parameters<'a>,
    ) -> Option<usize> {
        let node = self.node(index);
        let children = index + 1..node.next_sibling;
        let mut end = first.end();

        while let Some(next) = rest.next() {
            let checkpoint = parameters.checkpoint();
            let accepted = self
                .match_component(next.text, children.clone(), parameters)
                .is_some();
            parameters.rollback(checkpoint);

            if accepted {
                parameters.set_catch_all(&self.path[first.start..end]);
                let found = self.descend(rest, next, children, parameters);
                if found.is_none() {
                    parameters.rollback(checkpoint);
                }
                return found;
            }
            end = next.end();
        }

        if !self.has_value(node) {
            return None;
        }
        parameters.set_catch_all(&self.path[first.start..end]);
        Some(node.value_index)
    }
}
