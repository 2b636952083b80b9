use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; the layout file's
/// `debug_logging` flag raises it to `debug`, in which case `RUST_LOG`
/// may override the filter further.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        // Ignore `RUST_LOG` here so a stray environment variable cannot
        // flood the overlay's output.
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
