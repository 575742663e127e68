//! Tracing initialization. Logs always go to stderr so stdout carries only
//! the report.

use std::sync::Once;

use onemfin_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the subscriber once per process.
///
/// `ONEMFIN_LOG` (e.g. `ONEMFIN_LOG=onemfin_store=debug,info`) wins over
/// `observability.log_level`. `observability.json_logs` switches to JSON lines.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ONEMFIN_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let registry = tracing_subscriber::registry().with(filter);

        if config.json_logs {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .init();
        } else {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .init();
        }
    });
}
