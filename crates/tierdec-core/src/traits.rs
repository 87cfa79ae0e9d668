//! Trait interfaces between the constant cache and its consumers.
//!
//! [`PrecisionSource`] is what transcendental and division algorithms
//! depend on: the tiered cache (tierdec-cache) implements it with a ladder
//! lookup, and a plain [`Decimal`] implements it trivially for constants
//! short enough that tiering is unnecessary.

use crate::decimal::Decimal;

/// A constant that can be read at a requested significant-digit precision.
pub trait PrecisionSource: Send + Sync {
    /// The constant carrying at least `precision` significant digits, or
    /// the full value when it has fewer. Never fails.
    fn at_precision(&self, precision: u32) -> &Decimal;

    /// The full-precision value.
    fn full(&self) -> &Decimal;

    /// Significant digits handed back for `precision`.
    ///
    /// Default implementation counts the digits of
    /// [`at_precision`](Self::at_precision).
    fn digits_at(&self, precision: u32) -> u32 {
        self.at_precision(precision).num_digits()
    }
}

impl PrecisionSource for Decimal {
    fn at_precision(&self, _precision: u32) -> &Decimal {
        self
    }

    fn full(&self) -> &Decimal {
        self
    }
}
