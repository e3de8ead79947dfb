//! Logging setup for binaries and embedding services.
//!
//! Production emits JSON lines; every other environment gets coloured,
//! human-readable output. `RUST_LOG` overrides the default filter.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber with an `info` default filter.
pub fn init_logging() {
    init_logging_with("info");
}

/// Install the global subscriber with a custom default filter directive.
///
/// Returns `false` when a subscriber was already installed, so repeated calls
/// from tests or embedding hosts are harmless.
pub fn init_logging_with(default_directive: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    if is_production(&get_environment()) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .is_ok()
    }
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}
