//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use prospect_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "PROSPECT_LOG";

/// Filter used when `PROSPECT_LOG` is unset or invalid.
pub const FALLBACK_FILTER: &str = "prospect=info";

static INIT: Once = Once::new();

/// Initialize human-readable tracing output.
///
/// Reads `PROSPECT_LOG` for per-crate levels, e.g.
/// `PROSPECT_LOG=prospect_discovery=debug,prospect_storage=warn`.
/// Falls back to `prospect=info`.
///
/// Idempotent: only the first call of any `init_*` function installs a subscriber.
pub fn init_tracing() {
    install(env_filter(FALLBACK_FILTER), false);
}

/// Same as [`init_tracing`] with one JSON object per event.
pub fn init_tracing_json() {
    install(env_filter(FALLBACK_FILTER), true);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
/// `PROSPECT_LOG` is ignored.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize from the `[observability]` config section.
///
/// `PROSPECT_LOG` still wins when set. A bare level such as `debug` is scoped
/// to the workspace crates.
pub fn init_from_config(config: &ObservabilityConfig) {
    let fallback = fallback_directive(&config.log_level);
    install(env_filter(&fallback), config.json_logs);
}

/// Expand a bare level into a directive for the workspace crates.
pub fn fallback_directive(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        FALLBACK_FILTER.to_string()
    } else if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("prospect={level}")
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        // A host application may already own the global subscriber.
        let result = if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global subscriber already installed; keeping it");
        }
    });
}
