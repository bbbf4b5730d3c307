//! Integration tests for building and resolving route tries.
//!
//! Tests cover: capture substitution, literal precedence, affix captures and
//! wildcards, recursive wildcards, non-terminal prefixes, the root route,
//! backtracking, idempotence, duplicate policies, and concurrent resolution.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use routetrie_core::{DuplicatePolicy, RouteError, RoutingSettings};
use routetrie_trie::{Trie, TrieBuilder};

fn build(patterns: &[&'static str]) -> Trie<&'static str> {
    let mut builder = TrieBuilder::new();
    for pattern in patterns {
        builder.add_entry(pattern, *pattern).unwrap();
    }
    builder.build()
}

// ═════════════════════════════════════════════════════════════════════
// 1. Registered patterns resolve with their substituted captures
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_instantiated_patterns_resolve_to_their_values() {
    let routes = [
        ("/", "/"),
        ("/blog", "/blog"),
        ("/blog/:year/:slug", "/blog/2024/hello"),
        ("/users/{id}/avatar.{ext}", "/users/7/avatar.png"),
        ("/media/{name}.mp4", "/media/intro.mp4"),
        ("/api/v1/health", "/api/v1/health"),
    ];
    let trie = build(&routes.map(|(pattern, _)| pattern));

    for (pattern, path) in routes {
        let (value, _) = trie
            .resolve(path)
            .unwrap_or_else(|| panic!("{path} did not resolve"));
        assert_eq!(*value, pattern);
    }

    let (_, params) = trie.resolve("/blog/2024/hello").unwrap();
    let captured: HashMap<_, _> = params.iter().collect();
    assert_eq!(captured, HashMap::from([("year", "2024"), ("slug", "hello")]));

    let (_, params) = trie.resolve("/users/7/avatar.png").unwrap();
    assert_eq!(params.get("id"), Some("7"));
    assert_eq!(params.get("ext"), Some("png"));
    assert_eq!(params.require::<u32>("id").unwrap(), 7);
}

// ═════════════════════════════════════════════════════════════════════
// 2. Literal routes win over overlapping captures
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_literal_precedence_regardless_of_registration_order() {
    for patterns in [["/users/list", "/users/:id"], ["/users/:id", "/users/list"]] {
        let trie = build(&patterns);
        assert_eq!(*trie.resolve("/users/list").unwrap().0, "/users/list");
        assert_eq!(*trie.resolve("/users/other").unwrap().0, "/users/:id");
    }
}

#[test]
fn test_affix_capture_beats_literal() {
    let trie = build(&["/f/photo.jpg", "/f/{name}.jpg"]);
    let (value, params) = trie.resolve("/f/photo.jpg").unwrap();
    assert_eq!(*value, "/f/{name}.jpg");
    assert_eq!(params.get("name"), Some("photo"));
}

#[test]
fn test_literal_reached_by_backtracking_from_affix_capture() {
    let trie = build(&["/f/photo.jpg/meta", "/f/{name}.jpg"]);
    assert_eq!(*trie.resolve("/f/photo.jpg/meta").unwrap().0, "/f/photo.jpg/meta");
}

// ═════════════════════════════════════════════════════════════════════
// 3. Affixes
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_wildcard_affix_binds_nothing_capture_affix_binds_name() {
    let trie = build(&["/files/*.jpg", "/docs/file.{ext}"]);

    let (value, params) = trie.resolve("/files/photo.jpg").unwrap();
    assert_eq!(*value, "/files/*.jpg");
    assert!(params.is_empty());

    let (_, params) = trie.resolve("/docs/file.doc").unwrap();
    assert_eq!(params.get("ext"), Some("doc"));
}

// ═════════════════════════════════════════════════════════════════════
// 4. Recursive wildcards
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_recursive_wildcard_span() {
    let trie = build(&["/static/**/index.html", "/static/**"]);

    let (value, params) = trie.resolve("/static/a/b/index.html").unwrap();
    assert_eq!(*value, "/static/**/index.html");
    assert_eq!(params.get_catch_all(), Some("a/b"));

    let (value, params) = trie.resolve("/static/a/b/style.css").unwrap();
    assert_eq!(*value, "/static/**");
    assert_eq!(params.get_catch_all(), Some("a/b/style.css"));
}

#[test]
fn test_recursive_wildcard_span_ends_at_first_accepted_component() {
    let trie = build(&["/**/a/b"]);
    assert!(trie.resolve("/x/a/y/a/b").is_none());

    let (_, params) = trie.resolve("/x/y/a/b").unwrap();
    assert_eq!(params.get_catch_all(), Some("x/y"));
}

#[test]
fn test_long_path_against_stacked_recursive_wildcards() {
    let trie = build(&["/**/**/**/**/z", "/**/**/**/**/y/z"]);
    let mut path = "/a".repeat(2_000);
    assert!(trie.resolve(&path).is_none());

    path.push_str("/z");
    assert_eq!(*trie.resolve(&path).unwrap().0, "/**/**/**/**/z");
}

#[test]
fn test_recursive_wildcard_is_last_resort() {
    let trie = build(&["/x/**", "/x/:id", "/x/:id/edit"]);
    assert_eq!(*trie.resolve("/x/1").unwrap().0, "/x/:id");
    assert_eq!(*trie.resolve("/x/1/edit").unwrap().0, "/x/:id/edit");

    let (value, params) = trie.resolve("/x/1/delete").unwrap();
    assert_eq!(*value, "/x/**");
    assert_eq!(params.get_catch_all(), Some("1/delete"));
    assert_eq!(params.get("id"), None);
}

// ═════════════════════════════════════════════════════════════════════
// 5. Structural prefixes, root, backtracking
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_structural_prefix_is_not_a_route() {
    let trie = build(&["/a/b/c"]);
    assert!(trie.resolve("/a/b").is_none());
    assert!(trie.resolve("/a/b/c").is_some());
}

#[test]
fn test_root_route() {
    let trie = build(&[""]);
    assert_eq!(*trie.resolve("").unwrap().0, "");
    let (_, params) = trie.resolve("/").unwrap();
    assert!(params.is_empty());
}

#[test]
fn test_capture_sibling_used_after_literal_branch_fails() {
    let trie = build(&["/x/literal/deep", "/x/:id"]);
    let (value, params) = trie.resolve("/x/literal").unwrap();
    assert_eq!(*value, "/x/:id");
    assert_eq!(params.get("id"), Some("literal"));
}

#[test]
fn test_literal_sibling_preferred_without_backtracking() {
    let trie = build(&["/x/:id", "/x/literal"]);
    let (value, params) = trie.resolve("/x/literal").unwrap();
    assert_eq!(*value, "/x/literal");
    assert!(params.is_empty());
}

#[test]
fn test_resolve_idempotent() {
    let trie = build(&["/a/:b", "/a/**/z", "/{x}.txt"]);
    for path in ["/a/1", "/a/1/2/z", "/readme.txt", "/nope/nope"] {
        let first = trie.resolve(path);
        assert_eq!(trie.resolve(path), first);
    }
}

// ═════════════════════════════════════════════════════════════════════
// 6. Build-time errors and duplicate policy
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_malformed_pattern_rejected() {
    let mut builder = TrieBuilder::new();
    let err = builder.add_entry("/a/b{c}d", ()).unwrap_err();
    assert!(matches!(err, RouteError::InvalidPattern { .. }));
    assert!(err.is_build_error());
}

#[test]
fn test_duplicate_last_write_wins() {
    let mut builder = TrieBuilder::new();
    builder.add_entry("/a/:id", "first").unwrap();
    builder.add_entry("/a/:id", "second").unwrap();
    let trie = builder.build();
    assert_eq!(*trie.resolve("/a/1").unwrap().0, "second");
    assert_eq!(trie.route_count(), 1);
}

#[test]
fn test_duplicate_rejected() {
    let mut builder = TrieBuilder::with_settings(RoutingSettings {
        duplicate_routes: DuplicatePolicy::Reject,
        ..RoutingSettings::default()
    });
    builder.add_entry("/a", "first").unwrap();
    assert!(matches!(
        builder.add_entry("/a/", "second"),
        Err(RouteError::DuplicateRoute(_))
    ));
    let trie = builder.build();
    assert_eq!(*trie.resolve("/a").unwrap().0, "first");
}

// ═════════════════════════════════════════════════════════════════════
// 7. Concurrent resolution
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_concurrent_resolution_shares_one_trie() {
    let mut builder = TrieBuilder::new();
    for i in 0..50 {
        builder.add_entry(&format!("/svc{i}/:id"), i).unwrap();
    }
    let trie = Arc::new(builder.build());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let trie = Arc::clone(&trie);
            thread::spawn(move || {
                for i in 0..50 {
                    let path = format!("/svc{i}/{t}");
                    let (value, params) = trie.resolve(&path).unwrap();
                    assert_eq!(*value, i);
                    assert_eq!(params.get_as::<usize>("id"), Some(t));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
