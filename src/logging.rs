use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// Defaults to warnings only; `RUST_LOG` adds more. Stdout is left to the
/// generated table or the result line.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
