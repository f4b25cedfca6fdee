use tracing_subscriber::{fmt, EnvFilter};

/// Build the log filter: `RUST_LOG` wins, otherwise `level`
/// (normally `AppConfig::log_level`).
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global fmt subscriber. A second call is a no-op so test
/// binaries and the service entry point can both call it.
pub fn init_tracing(level: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(level))
        .with_target(true)
        .try_init();
}
