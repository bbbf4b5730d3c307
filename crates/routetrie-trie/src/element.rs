//! Typed path elements.
//!
//! A route pattern is a sequence of [`PathElement`]s, one per `/`-delimited
//! segment. Each variant carries a fixed [`priority`](PathElement::priority)
//! that decides the order siblings are tried in during resolution.

use std::fmt;

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    /// Structural marker for the implicit root. Never matches a component.
    Null,
    /// Exact text, e.g. `users`.
    Literal(String),
    /// A whole-component capture, e.g. `:id` or `{id}`.
    Capture(String),
    /// A capture followed by fixed text, e.g. `{name}.jpg`.
    PrefixCapture {
        /// The parameter the leading part is bound to.
        parameter: String,
        /// The text the component must end with.
        suffix: String,
    },
    /// Fixed text followed by a capture, e.g. `file.{ext}`.
    SuffixCapture {
        /// The text the component must start with.
        prefix: String,
        /// The parameter the trailing part is bound to.
        parameter: String,
    },
    /// Any single component, e.g. `*`.
    Wildcard,
    /// Any component ending with the given text, e.g. `*.jpg`.
    PrefixWildcard(String),
    /// Any component starting with the given text, e.g. `file.*`.
    SuffixWildcard(String),
    /// One or more components, e.g. `**`.
    RecursiveWildcard,
}

impl PathElement {
    /// Sibling ordering priority. Higher values are tried first.
    ///
    /// | Kind | Priority |
    /// |---|---|
    /// | prefix / suffix capture | 1 |
    /// | literal, null | 0 |
    /// | prefix / suffix wildcard | -1 |
    /// | capture | -2 |
    /// | wildcard | -3 |
    /// | recursive wildcard | -4 |
    pub const fn priority(&self) -> i8 {
        match self {
            Self::PrefixCapture { .. } | Self::SuffixCapture { .. } => 1,
            Self::Literal(_) | Self::Null => 0,
            Self::PrefixWildcard(_) | Self::SuffixWildcard(_) => -1,
            Self::Capture(_) => -2,
            Self::Wildcard => -3,
            Self::RecursiveWildcard => -4,
        }
    }

    /// Returns the name of the parameter this element binds, if any.
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Self::Capture(name)
            | Self::PrefixCapture {
                parameter: name, ..
            }
            | Self::SuffixCapture {
                parameter: name, ..
            } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns the fixed text of a literal or affix element.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Literal(text)
            | Self::PrefixCapture { suffix: text, .. }
            | Self::SuffixCapture { prefix: text, .. }
            | Self::PrefixWildcard(text)
            | Self::SuffixWildcard(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Lowercases the fixed text (ASCII only) so elements that differ only
    /// in case share a node in a case-insensitive trie.
    #[must_use]
    pub fn fold_case(self) -> Self {
        match self {
            Self::Literal(text) => Self::Literal(text.to_ascii_lowercase()),
            Self::PrefixCapture { parameter, suffix } => Self::PrefixCapture {
                parameter,
                suffix: suffix.to_ascii_lowercase(),
            },
            Self::SuffixCapture { prefix, parameter } => Self::SuffixCapture {
                prefix: prefix.to_ascii_lowercase(),
                parameter,
            },
            Self::PrefixWildcard(suffix) => Self::PrefixWildcard(suffix.to_ascii_lowercase()),
            Self::SuffixWildcard(prefix) => Self::SuffixWildcard(prefix.to_ascii_lowercase()),
            other => other,
        }
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Literal(text) => f.write_str(text),
            Self::Capture(name) => write!(f, "{{{name}}}"),
            Self::PrefixCapture { parameter, suffix } => write!(f, "{{{parameter}}}{suffix}"),
            Self::SuffixCapture { prefix, parameter } => write!(f, "{prefix}{{{parameter}}}"),
            Self::Wildcard => f.write_str("*"),
            Self::PrefixWildcard(suffix) => write!(f, "*{suffix}"),
            Self::SuffixWildcard(prefix) => write!(f, "{prefix}*"),
            Self::RecursiveWildcard => f.write_str("**"),
        }
    }
}
