pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=taskorder=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Titles of `order` as `&str`, for terse assertions.
pub fn titles(order: &[String]) -> Vec<&str> {
    order.iter().map(|s| s.as_str()).collect()
}

/// Position of `title` in `order`; panics if it is missing.
pub fn position(order: &[String], title: &str) -> usize {
    order
        .iter()
        .position(|t| t == title)
        .unwrap_or_else(|| panic!("'{title}' missing from order {order:?}"))
}
