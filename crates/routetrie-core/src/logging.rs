//! Logging integration for routetrie.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-resolution spans.

use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::Settings;

/// Installs the global tracing subscriber described by `settings`.
///
/// `settings.log_level` is an [`EnvFilter`] directive such as `"warn"` or
/// `"routetrie_trie=trace"`; an unparsable directive falls back to `info`.
/// Debug mode selects a pretty multi-line format with source locations, and
/// JSON lines are used otherwise.
///
/// Events always go to stderr. The `routetrie` command prints its results on
/// stdout, and that output must stay clean enough to pipe (`dump --json`).
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn setup_logging(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if settings.debug {
        builder.pretty().with_file(true).with_line_number(true).try_init()
    } else {
        builder.json().try_init()
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed; keeping it");
    }
}

/// Creates a tracing span for resolving one request path.
///
/// # Examples
///
/// ```
/// use routetrie_core::logging::resolve_span;
///
/// let span = resolve_span("/users/42");
/// let _guard = span.enter();
/// tracing::trace!("resolving");
/// ```
pub fn resolve_span(path: &str) -> tracing::Span {
    tracing::trace_span!("resolve", path = path)
}
