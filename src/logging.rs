use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset; dev logs only show in debug builds.
fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "hanoi_sim=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the operator-facing report.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .try_init();
}
