//! Test tracing setup

use once_cell::sync::Lazy;

static TEST_TRACING: Lazy<()> = Lazy::new(|| {
    // Another harness may already own the global subscriber
    let _ = core_kernel::init_tracing("warn", false);
});

/// Installs the tracing subscriber once per test binary
///
/// `RUST_LOG` overrides the default `warn` level, e.g.
/// `RUST_LOG=domain_fiscal_code=debug`.
pub fn init_test_tracing() {
    Lazy::force(&TEST_TRACING);
}
