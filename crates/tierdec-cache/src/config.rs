//! Ladder construction settings.
//!
//! Provides [`CacheConfig`] with defaults matching the built-in statics:
//! round-half-up, the engine exponent bounds, and a ladder bounded by the
//! literal's string length.

use serde::{Deserialize, Serialize};
use tierdec_core::{Context, Decimal, Rounding, MAX_EXPONENT, MIN_EXPONENT};

/// Upper bound (exclusive) on ladder tier precisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderBound {
    /// Length of the literal string. May count a sign or decimal point,
    /// which at most adds one tier that lookups never need.
    #[default]
    LiteralLength,
    /// Exact significant-digit count of the parsed literal.
    SignificantDigits,
}

impl LadderBound {
    /// Exclusive precision limit for a ladder over `literal`.
    pub fn max_precision(self, literal: &str, parsed: &Decimal) -> u32 {
        match self {
            Self::LiteralLength => u32::try_from(literal.len()).unwrap_or(u32::MAX),
            Self::SignificantDigits => parsed.num_digits(),
        }
    }
}

/// Configuration for building a [`TieredConstant`](crate::TieredConstant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Rounding applied to each tier.
    pub rounding: Rounding,
    /// Where the ladder stops.
    pub ladder_bound: LadderBound,
    /// Smallest adjusted exponent a tier may carry.
    pub min_exponent: i32,
    /// Largest adjusted exponent a tier may carry.
    pub max_exponent: i32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            rounding: Rounding::HalfUp,
            ladder_bound: LadderBound::LiteralLength,
            min_exponent: MIN_EXPONENT,
            max_exponent: MAX_EXPONENT,
        }
    }
}

impl CacheConfig {
    /// Rounding context for the tier at `precision`.
    pub fn context(&self, precision: u32) -> Context {
        Context {
            precision,
            rounding: self.rounding,
            min_exponent: self.min_exponent,
            max_exponent: self.max_exponent,
        }
    }
}
