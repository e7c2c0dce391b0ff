//! Tracing subscriber setup
//!
//! Library code only emits events; applications call [`init`] once at
//! startup to print them.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use underbar_core::{Error, Result};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing system
///
/// Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`],
/// and writes compact, uncolored events to stderr. Fails if a global
/// subscriber is already installed.
pub fn init() -> Result<()> {
    init_with_default(DEFAULT_FILTER)
}

/// [`init`] with a caller-chosen fallback filter
pub fn init_with_default(default_filter: &str) -> Result<()> {
    let filter = build_filter(default_filter)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to install tracing subscriber: {e}")))
}

/// The filter from `RUST_LOG`, or `default_filter` when it is unset or invalid
fn build_filter(default_filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| Error::configuration(format!("invalid log filter '{default_filter}': {e}")))
}
