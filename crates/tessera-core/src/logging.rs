use tracing_subscriber::EnvFilter;

/// Default filter directives used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "debug,winit=info,puffin_http=info";

/// Install the global `tracing` subscriber with the default filter.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `filter` when it is set. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init_with_filter(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
