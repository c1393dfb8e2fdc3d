use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_tracker=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Logs go to stderr so they never interleave with menu output on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(build_filter(raw.as_deref()))
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Filter from a `RUST_LOG`-style string; the default applies only when it is
/// missing or unparsable.
pub(crate) fn build_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
