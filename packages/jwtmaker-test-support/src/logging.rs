//! Test subscriber shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static SUBSCRIBER: OnceCell<bool> = OnceCell::new();

const QUIET: &str = "warn";

/// `TEST_LOG` takes precedence over `RUST_LOG`; with neither set only
/// warnings are shown.
fn directives(test_log: Option<String>, rust_log: Option<String>) -> String {
    test_log
        .or(rust_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| QUIET.to_string())
}

/// Install a test-writer subscriber once per test binary.
///
/// Returns whether this binary's subscriber is the one installed here; it is
/// `false` when something else registered a global subscriber first.
pub fn init() -> bool {
    *SUBSCRIBER.get_or_init(|| {
        let directives = directives(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(QUIET));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .is_ok()
    })
}
