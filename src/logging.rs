use tracing_subscriber::EnvFilter;

/// Log to stderr. `log_level` wins over `RUST_LOG`; without either only
/// warnings and errors are shown.
pub fn init_logger(no_color: bool, log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_env_filter(filter)
        .init();
}
