//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`; command results go to stdout.
//! `RUST_LOG` takes precedence over the built-in level, with or without
//! `--verbose`.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "expense_tracker=debug"
    } else {
        "expense_tracker=warn"
    }
}

/// Filter directive to install: `RUST_LOG` when set and non-empty, else the default
fn filter_directive(verbose: bool, rust_log: Option<String>) -> String {
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| default_directive(verbose).to_string())
}

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let directive = filter_directive(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
        let filter = EnvFilter::try_new(directive)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
