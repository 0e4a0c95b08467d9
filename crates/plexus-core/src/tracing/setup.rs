//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Plexus tracing/logging system.
///
/// Reads the `PLEXUS_LOG` environment variable for per-subsystem log levels.
/// Format: `PLEXUS_LOG=plexus_graph::ingest=debug,plexus_graph::layout=warn`
///
/// Falls back to `plexus=info` if `PLEXUS_LOG` is not set or is invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PLEXUS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("plexus=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();

        ::tracing::debug!(version = crate::constants::VERSION, "tracing initialized");
    });
}
