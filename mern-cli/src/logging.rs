use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber with a `fmt` layer on stderr.
///
/// Respects the `RUST_LOG` environment variable. Falls back to
/// [`fallback_filter`].
///
/// Call this once, at the very start of `main`, before any tracing macro.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Filter used when `RUST_LOG` is unset.
///
/// File operations and skipped destinations are logged at `debug`, so only
/// `--verbose` shows them next to the colored command output.
pub fn fallback_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,mern_cli=debug"
    } else {
        "warn"
    }
}
