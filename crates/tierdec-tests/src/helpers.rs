//! Shared test helpers for integration tests.

use tierdec_cache::TieredConstant;
use tierdec_core::Decimal;
use tracing_subscriber::EnvFilter;

/// Route tracing output to the test harness. Safe to call from every test.
///
/// Honors `RUST_LOG`, e.g. `RUST_LOG=tierdec_cache=trace`.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Index of `value` within the ladder of `constant`, by address.
///
/// `None` means `value` is the unrounded fallback (or not from this cache).
pub fn tier_of(constant: &TieredConstant, value: &Decimal) -> Option<usize> {
    constant
        .tiers()
        .iter()
        .position(|tier| std::ptr::eq(tier, value))
}

/// Whether `value` is exactly the unrounded literal of `constant`.
pub fn is_unrounded(constant: &TieredConstant, value: &Decimal) -> bool {
    std::ptr::eq(constant.unrounded(), value)
}

/// Build a literal with exactly `digits` significant digits: `1.2345678901…`.
pub fn literal_with_digits(digits: usize) -> String {
    let mut s = String::with_capacity(digits + 1);
    for i in 0..digits {
        if i == 1 {
            s.push('.');
        }
        s.push(char::from(b'0' + ((i + 1) % 10) as u8));
    }
    s
}
