use tracing_subscriber::EnvFilter;

pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose > 0 {
        "debug"
    } else {
        "info"
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the flag-derived level.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
