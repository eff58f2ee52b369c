//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; installing a subscriber is
//! the embedding program's job. This helper is what the `cpusched`
//! binary uses.

use tracing_subscriber::{
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Installs a global `fmt` subscriber.
///
/// Environment variables:
/// - `RUST_LOG`: filter directives (default: `info`)
/// - `CPUSCHED_TRACE_JSON`: `1`/`true` for JSON lines instead of compact text
///
/// Output goes to stderr.
///
/// Returns an error if a global subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("CPUSCHED_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    }
}
