//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the cedetect tracing/logging system.
///
/// Reads the `CEDETECT_LOG` environment variable for per-subsystem log
/// levels, e.g. `CEDETECT_LOG=cedetect_analysis=debug,cedetect_cli=info`.
///
/// Falls back to `info` if `CEDETECT_LOG` is not set or invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CEDETECT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
