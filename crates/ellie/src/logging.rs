//! Diagnostic logging to stderr.
//!
//! Filter precedence: `ELLIE_LOG` (an `EnvFilter` directive), then `--verbose`
//! (debug), then `--quiet` (error), otherwise warn.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding a filter directive, e.g. `ellie_api_rs=debug`.
pub const LOG_ENV: &str = "ELLIE_LOG";

/// Returns the default filter directive for the given verbosity flags.
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbose: bool, quiet: bool, use_colors: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(verbose)
            .with_ansi(use_colors)
            .with_filter(filter),
    );

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}
