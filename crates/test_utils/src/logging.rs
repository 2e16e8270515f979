//! Test Logging Setup

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .init();
});

/// Initializes a process-wide test subscriber; safe to call from every test
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
