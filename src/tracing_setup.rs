//! Standard tracing subscriber setup for applications embedding flagrt.

use tracing_subscriber::filter::Directive;

/// Initialize a tracing subscriber with env-based filtering.
///
/// Default directives:
/// - `flagrt=info`
pub fn init_tracing() {
    init_tracing_with(None);
}

/// Like [`init_tracing`], with an extra directive string (e.g. from
/// [`crate::ApiConfig::log_filter`]) layered on top of `RUST_LOG`.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing_with(extra: Option<&str>) {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("flagrt=info".parse().unwrap_or_default());

    // Malformed directives are skipped rather than failing startup.
    let directives = extra
        .into_iter()
        .flat_map(|d| d.split(','))
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .filter_map(|d| d.parse::<Directive>().ok());
    for directive in directives {
        filter = filter.add_directive(directive);
    }

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
