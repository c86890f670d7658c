//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Honors `RUST_LOG`; panics if a logger is already installed.
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system unless a logger is already installed
///
/// Returns `false` when another logger was installed first.
pub fn try_init() -> bool {
    env_logger::try_init().is_ok()
}

/// Install a logger that writes through the test harness' captured output
#[doc(hidden)]
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
