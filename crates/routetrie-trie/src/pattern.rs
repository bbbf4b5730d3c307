//! Route pattern parsing.
//!
//! This module turns a route pattern string into a [`RouterPath`], an ordered
//! sequence of [`PathElement`]s. Patterns are split on `/`; empty segments
//! (leading, trailing, or doubled slashes) are ignored.
//!
//! # Syntax
//!
//! | Segment | Element |
//! |---|---|
//! | `users` | [`PathElement::Literal`] |
//! | `:id` or `{id}` | [`PathElement::Capture`] |
//! | `{name}.jpg` | [`PathElement::PrefixCapture`] |
//! | `file.{ext}` | [`PathElement::SuffixCapture`] |
//! | `*` | [`PathElement::Wildcard`] |
//! | `*.jpg` | [`PathElement::PrefixWildcard`] |
//! | `file.*` | [`PathElement::SuffixWildcard`] |
//! | `**` | [`PathElement::RecursiveWildcard`] |
//!
//! A sigil with fixed text on both sides (`a{b}c`, `a*b`), more than one
//! sigil per segment, an empty or unclosed capture name, and a capture name
//! used twice in one pattern are all rejected with
//! [`RouteError::InvalidPattern`].

use std::fmt;
use std::str::FromStr;

use routetrie_core::{RouteError, RouteResult};

use crate::element::PathElement;

const SIGILS: [char; 4] = ['{', '}', '*', ':'];

/// A parsed route pattern.
///
/// # Examples
///
/// ```
/// use routetrie_trie::pattern::RouterPath;
/// use routetrie_trie::PathElement;
///
/// let path: RouterPath = "/users/:id/avatar.{ext}".parse().unwrap();
/// assert_eq!(path.elements()[1], PathElement::Capture("id".into()));
/// assert_eq!(path.to_string(), "/users/{id}/avatar.{ext}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouterPath {
    elements: Vec<PathElement>,
}

impl RouterPath {
    /// Parses a route pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] if any segment is malformed.
    pub fn parse(pattern: &str) -> RouteResult<Self> {
        let mut elements: Vec<PathElement> = Vec::new();

        for segment in pattern.split('/').filter(|s| !s.is_empty()) {
            let element = parse_segment(pattern, segment)?;
            if let Some(name) = element.parameter_name() {
                if elements.iter().any(|e| e.parameter_name() == Some(name)) {
                    return Err(RouteError::invalid_pattern(
                        pattern,
                        format!("parameter '{name}' is captured more than once"),
                    ));
                }
            }
            elements.push(element);
        }

        Ok(Self { elements })
    }

    /// Creates a path directly from elements, bypassing the parser.
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    /// Returns the elements in order.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Consumes the path and returns its elements.
    pub fn into_elements(self) -> Vec<PathElement> {
        self.elements
    }

    /// Returns `true` for the root pattern (no segments).
    pub fn is_root(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the parameter names captured by this path, in order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(PathElement::parameter_name)
    }
}

impl FromStr for RouterPath {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RouterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elements.is_empty() {
            return f.write_str("/");
        }
        for element in &self.elements {
            write!(f, "/{element}")?;
        }
        Ok(())
    }
}

/// Parses a route pattern into its elements.
///
/// # Errors
///
/// Returns [`RouteError::InvalidPattern`] if any segment is malformed.
pub fn parse(pattern: &str) -> RouteResult<Vec<PathElement>> {
    RouterPath::parse(pattern).map(RouterPath::into_elements)
}

/// Classifies a single non-empty segment.
fn parse_segment(pattern: &str, segment: &str) -> RouteResult<PathElement> {
    match segment {
        "*" => return Ok(PathElement::Wildcard),
        "**" => return Ok(PathElement::RecursiveWildcard),
        _ => {}
    }

    if let Some(name) = segment.strip_prefix(':') {
        validate_name(pattern, name)?;
        return Ok(PathElement::Capture(name.to_string()));
    }

    if segment.contains(['{', '}']) {
        return parse_brace_capture(pattern, segment);
    }

    if segment.contains('*') {
        return parse_affix_wildcard(pattern, segment);
    }

    Ok(PathElement::Literal(segment.to_string()))
}

/// Parses `{name}`, `{name}suffix`, or `prefix{name}`.
fn parse_brace_capture(pattern: &str, segment: &str) -> RouteResult<PathElement> {
    let open = segment.find('{');
    let close = segment.find('}');
    let (open, close) = match (open, close) {
        (Some(open), Some(close)) if open < close => (open, close),
        _ => {
            return Err(RouteError::invalid_pattern(
                pattern,
                format!("unbalanced braces in segment '{segment}'"),
            ))
        }
    };

    let name = &segment[open + 1..close];
    let before = &segment[..open];
    let after = &segment[close + 1..];
    validate_name(pattern, name)?;
    validate_affix(pattern, segment, before)?;
    validate_affix(pattern, segment, after)?;

    match (before.is_empty(), after.is_empty()) {
        (true, true) => Ok(PathElement::Capture(name.to_string())),
        (true, false) => Ok(PathElement::PrefixCapture {
            parameter: name.to_string(),
            suffix: after.to_string(),
        }),
        (false, true) => Ok(PathElement::SuffixCapture {
            prefix: before.to_string(),
            parameter: name.to_string(),
        }),
        (false, false) => Err(RouteError::invalid_pattern(
            pattern,
            format!("capture in segment '{segment}' must sit at one edge"),
        )),
    }
}

/// Parses `*suffix` or `prefix*`.
fn parse_affix_wildcard(pattern: &str, segment: &str) -> RouteResult<PathElement> {
    if let Some(suffix) = segment.strip_prefix('*') {
        validate_affix(pattern, segment, suffix)?;
        return Ok(PathElement::PrefixWildcard(suffix.to_string()));
    }
    if let Some(prefix) = segment.strip_suffix('*') {
        validate_affix(pattern, segment, prefix)?;
        return Ok(PathElement::SuffixWildcard(prefix.to_string()));
    }
    Err(RouteError::invalid_pattern(
        pattern,
        format!("wildcard in segment '{segment}' must sit at one edge"),
    ))
}

fn validate_name(pattern: &str, name: &str) -> RouteResult<()> {
    if name.is_empty() {
        return Err(RouteError::invalid_pattern(pattern, "empty parameter name"));
    }
    if name.contains(SIGILS) {
        return Err(RouteError::invalid_pattern(
            pattern,
            format!("invalid parameter name '{name}'"),
        ));
    }
    Ok(())
}

/// Fixed text next to a sigil may not contain another sigil.
fn validate_affix(pattern: &str, segment: &str, affix: &str) -> RouteResult<()> {
    if affix.contains(SIGILS) {
        return Err(RouteError::invalid_pattern(
            pattern,
            format!("segment '{segment}' contains more than one sigil"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> PathElement {
        PathElement::Literal(s.to_string())
    }

    #[test]
    fn test_parse_literals_and_empty_segments() {
        assert_eq!(
            parse("//api/v1//users/").unwrap(),
            vec![lit("api"), lit("v1"), lit("users")]
        );
    }

    #[test]
    fn test_parse_root() {
        assert!(parse("").unwrap().is_empty());
        assert!(RouterPath::parse("/").unwrap().is_root());
    }

    #[test]
    fn test_parse_captures() {
        assert_eq!(
            parse("/users/:id").unwrap(),
            vec![lit("users"), PathElement::Capture("id".into())]
        );
        assert_eq!(
            parse("/users/{id}").unwrap(),
            vec![lit("users"), PathElement::Capture("id".into())]
        );
    }

    #[test]
    fn test_parse_affix_captures() {
        assert_eq!(
            parse("/{name}.jpg").unwrap(),
            vec![PathElement::PrefixCapture {
                parameter: "name".into(),
                suffix: ".jpg".into()
            }]
        );
        assert_eq!(
            parse("/file.{ext}").unwrap(),
            vec![PathElement::SuffixCapture {
                prefix: "file.".into(),
                parameter: "ext".into()
            }]
        );
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(
            parse("/*/*.jpg/file.*/**").unwrap(),
            vec![
                PathElement::Wildcard,
                PathElement::PrefixWildcard(".jpg".into()),
                PathElement::SuffixWildcard("file.".into()),
                PathElement::RecursiveWildcard,
            ]
        );
    }

    #[test]
    fn test_colon_inside_literal_is_text() {
        assert_eq!(parse("/a:b").unwrap(), vec![lit("a:b")]);
    }

    #[test]
    fn test_reject_capture_mid_segment() {
        let err = parse("/a{b}c").unwrap_err();
        assert!(err.to_string().contains("one edge"), "{err}");
    }

    #[test]
    fn test_reject_wildcard_mid_segment() {
        assert!(parse("/a*b").is_err());
        assert!(parse("/***").is_err());
        assert!(parse("/*a*").is_err());
    }

    #[test]
    fn test_reject_bad_braces() {
        assert!(parse("/{id").is_err());
        assert!(parse("/id}").is_err());
        assert!(parse("/}id{").is_err());
        assert!(parse("/{}").is_err());
        assert!(parse("/{a}{b}").is_err());
        assert!(parse("/*{a}").is_err());
    }

    #[test]
    fn test_reject_empty_colon_capture() {
        assert!(parse("/users/:").is_err());
        assert!(parse("/users/:a*").is_err());
    }

    #[test]
    fn test_reject_duplicate_parameter() {
        let err = parse("/:id/{id}.json").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }));
    }

    #[test]
    fn test_display_canonical_form() {
        let path = RouterPath::parse("users/:id/**/").unwrap();
        assert_eq!(path.to_string(), "/users/{id}/**");
        assert_eq!(RouterPath::parse("").unwrap().to_string(), "/");
    }

    #[test]
    fn test_parameter_names() {
        let path = RouterPath::parse("/{year}/file.{ext}/*").unwrap();
        assert_eq!(path.parameter_names().collect::<Vec<_>>(), vec!["year", "ext"]);
    }
}
