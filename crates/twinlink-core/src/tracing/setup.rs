//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the twinlink tracing/logging system.
///
/// Reads the `TWINLINK_LOG` environment variable for per-crate log levels.
/// Format: `TWINLINK_LOG=twinlink_study=debug,twinlink_model=info`
///
/// Falls back to `info` if `TWINLINK_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("TWINLINK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Initialize tracing with an explicit filter string, e.g. from `--log-level`.
/// `TWINLINK_LOG` still wins when set.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_env("TWINLINK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(filter));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
