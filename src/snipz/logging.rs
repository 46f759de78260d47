//! Logging setup.
//!
//! The library only emits `tracing` events; the binary decides where they go by
//! calling [`init`] once at startup. Logs are written to stderr so they never mix
//! with command output.
//!
//! The filter comes from `SNIPZ_LOG` (standard `EnvFilter` syntax) when set,
//! otherwise `snipz=warn`, or `snipz=debug` with `--verbose`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SNIPZ_LOG";

static INIT_ONCE: Once = Once::new();

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "snipz=debug"
    } else {
        "snipz=warn"
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // A subscriber may already be set (tests embedding the library).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
