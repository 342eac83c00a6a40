use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter, e.g. `countables=debug`.
pub const LOG_ENV: &str = "COUNTABLES_LOG";

/// Initialize tracing on stderr.
///
/// `COUNTABLES_LOG` takes precedence. Otherwise only warnings are shown, or
/// everything from debug up when `verbose` is set. Calling this more than
/// once is a no-op.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}
