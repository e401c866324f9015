// src/logging.rs
use std::io;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `LINETALLY_LOG=debug`.
pub const LOG_ENV: &str = "LINETALLY_LOG";

const DEFAULT_FILTER: &str = "linetally=warn";

/// Installs the stderr log subscriber.
///
/// Falls back to warnings only when `LINETALLY_LOG` is unset or invalid.
/// Later calls do nothing.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
