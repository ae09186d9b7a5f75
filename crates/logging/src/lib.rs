use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

fn env_filter() -> EnvFilter {
    // RUST_LOG wins when set
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. Panics if one is already installed.
pub fn init_logger() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_thread_names(true)
                .with_line_number(false)
                .with_file(false)
                .pretty(),
        )
        .with(env_filter())
        .init();
}

/// Subscriber for test binaries: output goes through the test harness
/// capture and repeated calls across tests are no-ops.
pub fn init_test_logger() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer().with_target(true))
        .with(env_filter())
        .try_init();
}
