use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` wins when set; otherwise `default_level` is used as the filter.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs a stderr subscriber so stdout only carries demo output.
/// A second call is a no-op.
pub fn init(default_level: &str) {
    let _ = fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
