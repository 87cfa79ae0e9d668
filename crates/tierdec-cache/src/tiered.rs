//! Ladder of pre-rounded copies of one constant.
//!
//! `tiers[i]` holds the constant rounded half-up to `2^i` significant
//! digits, for every `2^i` below the ladder bound. A lookup for `p` digits
//! picks `tiers[ceil(log2 p)]`, the coarsest tier that still carries at
//! least `p` digits, so downstream arithmetic never drags along thousands
//! of digits it does not need.
//!
//! Construction happens once; afterwards a [`TieredConstant`] is read-only
//! and shared between threads without locking.

use tierdec_core::{ConstantError, Decimal, PrecisionSource};
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::registry::{fatal, try_register_constant};

/// Ladder index serving a request for `precision` significant digits:
/// `ceil(log2(precision))`, with 0 and 1 both mapping to index 0.
///
/// # Examples
///
/// ```
/// use tierdec_cache::tier_index;
/// assert_eq!(tier_index(0), 0);
/// assert_eq!(tier_index(1), 0);
/// assert_eq!(tier_index(2), 1);
/// assert_eq!(tier_index(20), 5);
/// assert_eq!(tier_index(32), 5);
/// assert_eq!(tier_index(33), 6);
/// ```
pub fn tier_index(precision: u32) -> usize {
    if precision <= 1 {
        return 0;
    }
    // ceil(log2 p) = 1 + floor(log2(p - 1)) = bit length of p - 1.
    (u32::BITS - (precision - 1).leading_zeros()) as usize
}

/// A constant together with its precision ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieredConstant {
    unrounded: Decimal,
    tiers: Vec<Decimal>,
}

impl TieredConstant {
    /// Build the ladder for a built-in `literal` with the default config.
    ///
    /// # Panics
    ///
    /// Panics if the literal is malformed or a tier cannot be rounded.
    pub fn build(literal: &str) -> Self {
        Self::build_with(literal, &CacheConfig::default())
    }

    /// Like [`build`](Self::build) with an explicit config.
    pub fn build_with(literal: &str, config: &CacheConfig) -> Self {
        match Self::try_build(literal, config) {
            Ok(constant) => constant,
            Err(err) => fatal(err),
        }
    }

    /// Parse `literal` and round it to every ladder tier.
    pub fn try_build(literal: &str, config: &CacheConfig) -> Result<Self, ConstantError> {
        let unrounded = try_register_constant(literal)?;
        let max_precision = config.ladder_bound.max_precision(literal, &unrounded);

        let mut tiers = Vec::new();
        let mut precision: u32 = 1;
        while precision < max_precision {
            let tier = config
                .context(precision)
                .round(&unrounded)
                .map_err(|source| ConstantError::Round { precision, source })?;
            trace!(precision, digits = tier.num_digits(), "tiered: tier rounded");
            tiers.push(tier);

            precision = match precision.checked_mul(2) {
                Some(next) => next,
                None => break,
            };
        }

        debug!(
            digits = unrounded.num_digits(),
            max_precision,
            tiers = tiers.len(),
            "tiered: ladder built"
        );
        Ok(Self { unrounded, tiers })
    }

    /// The cached value with the fewest digits that is still at least
    /// `precision` digits, or the full value when no tier is that precise.
    ///
    /// `precision` 0 is served like 1. Never fails.
    pub fn get(&self, precision: u32) -> &Decimal {
        self.tiers
            .get(tier_index(precision))
            .unwrap_or(&self.unrounded)
    }

    /// The full-precision value.
    pub fn unrounded(&self) -> &Decimal {
        &self.unrounded
    }

    pub fn tiers(&self) -> &[Decimal] {
        &self.tiers
    }

    /// Number of ladder tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Target precision (`2^index`) of the tier at `index`, if it exists.
    pub fn tier_precision(&self, index: usize) -> Option<u32> {
        if index < self.tiers.len() {
            1u32.checked_shl(index as u32)
        } else {
            None
        }
    }

    /// Target precision of the finest tier.
    pub fn max_tier_precision(&self) -> Option<u32> {
        self.tiers.len().checked_sub(1).and_then(|i| self.tier_precision(i))
    }
}

impl PrecisionSource for TieredConstant {
    fn at_precision(&self, precision: u32) -> &Decimal {
        self.get(precision)
    }

    fn full(&self) -> &Decimal {
        &self.unrounded
    }
}
