//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber for embedders that want the
//! core's spans and events on stderr. Libraries embedding the crate into a
//! larger application with its own subscriber should skip this and let their
//! subscriber collect the spans directly.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes a formatted tracing subscriber.
///
/// Filters by `config.trace_level` (default `"info"`); the `RUST_LOG`
/// directive syntax is accepted, so `"stationsearch=debug"` works too.
///
/// Idempotent and failure-tolerant: when a global subscriber is already
/// installed this call does nothing.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
