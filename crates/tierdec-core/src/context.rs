//! Rounding context: round a [`Decimal`] to a number of significant digits
//! under a rounding mode, within the engine-wide exponent bounds.

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::decimal::{digit_count, Decimal};
use crate::error::RoundError;

/// Largest adjusted exponent a rounded result may carry.
pub const MAX_EXPONENT: i32 = 100_000;
/// Smallest adjusted exponent a rounded result may carry.
pub const MIN_EXPONENT: i32 = -MAX_EXPONENT;

/// How discarded digits influence the retained coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Truncate toward zero.
    Down,
    /// Round to nearest; ties away from zero. Used for every constant tier.
    #[default]
    HalfUp,
    /// Round to nearest; ties to an even last digit.
    HalfEven,
    /// Round to nearest; ties toward zero.
    HalfDown,
    /// Away from zero whenever anything is discarded.
    Up,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
}

impl Rounding {
    /// Whether the truncated `quotient` must be incremented, given the
    /// discarded `remainder` out of `divisor`.
    fn rounds_away(
        self,
        negative: bool,
        quotient: &BigUint,
        remainder: &BigUint,
        divisor: &BigUint,
    ) -> bool {
        if remainder.is_zero() {
            return false;
        }
        let half = (remainder * 2u32).cmp(divisor);
        match self {
            Self::Down => false,
            Self::Up => true,
            Self::HalfUp => half != Ordering::Less,
            Self::HalfDown => half == Ordering::Greater,
            Self::HalfEven => {
                half == Ordering::Greater
                    || (half == Ordering::Equal && !(quotient % 2u32).is_zero())
            }
            Self::Ceiling => !negative,
            Self::Floor => negative,
        }
    }
}

/// Parameters for a rounding operation.
///
/// A `precision` of 0 means unlimited: the value is only checked against
/// the exponent bounds.
///
/// # Examples
///
/// ```
/// use tierdec_core::{Context, Decimal};
/// let ctx = Context::with_precision(4);
/// let ln10: Decimal = "2.302585092994".parse().unwrap();
/// assert_eq!(ctx.round(&ln10).unwrap().to_string(), "2.303");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub precision: u32,
    pub rounding: Rounding,
    pub min_exponent: i32,
    pub max_exponent: i32,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: 0,
            rounding: Rounding::HalfUp,
            min_exponent: MIN_EXPONENT,
            max_exponent: MAX_EXPONENT,
        }
    }
}

impl Context {
    /// Round-half-up context at `precision` with the engine exponent bounds.
    pub fn with_precision(precision: u32) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Round `x` to at most `self.precision` significant digits.
    ///
    /// Values that already fit are returned unchanged (trailing zeros are
    /// kept). A carry out of the top digit (`9.99` → `10`) drops one more
    /// digit so the result never exceeds the precision.
    pub fn round(&self, x: &Decimal) -> Result<Decimal, RoundError> {
        let digits = x.num_digits();
        if self.precision == 0 || digits <= self.precision {
            self.check_exponent(x)?;
            return Ok(x.clone());
        }

        let drop = digits - self.precision;
        let divisor = BigUint::from(10u32).pow(drop);
        let mut quotient = x.coefficient() / &divisor;
        let remainder = x.coefficient() % &divisor;
        let mut exponent = i64::from(x.exponent()) + i64::from(drop);

        if self
            .rounding
            .rounds_away(x.is_negative(), &quotient, &remainder, &divisor)
        {
            quotient += 1u32;
            if digit_count(&quotient) > self.precision {
                quotient /= 10u32;
                exponent += 1;
            }
        }

        let exponent = i32::try_from(exponent).map_err(|_| RoundError::ExponentOutOfRange)?;
        let rounded = Decimal::from_parts(x.is_negative(), quotient, exponent);
        self.check_exponent(&rounded)?;
        Ok(rounded)
    }

    fn check_exponent(&self, x: &Decimal) -> Result<(), RoundError> {
        let adjusted = x.adjusted_exponent();
        if adjusted > i64::from(self.max_exponent) {
            return Err(RoundError::Overflow {
                adjusted,
                max: self.max_exponent,
            });
        }
        if adjusted < i64::from(self.min_exponent) {
            return Err(RoundError::Underflow {
                adjusted,
                min: self.min_exponent,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literals;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal")
    }

    fn round(s: &str, precision: u32, rounding: Rounding) -> String {
        let ctx = Context {
            precision,
            rounding,
            ..Context::default()
        };
        ctx.round(&dec(s)).expect("in range").to_string()
    }

    #[test]
    fn default_context_is_unlimited_half_up() {
        let ctx = Context::default();
        assert_eq!(ctx.precision, 0);
        assert_eq!(ctx.rounding, Rounding::HalfUp);
        assert_eq!(ctx.min_exponent, MIN_EXPONENT);
        assert_eq!(ctx.max_exponent, MAX_EXPONENT);
    }

    #[test]
    fn ln10_prefixes() {
        let ln10 = dec(literals::LN10);
        let at = |p| Context::with_precision(p).round(&ln10).unwrap().to_string();
        assert_eq!(at(1), "2");
        assert_eq!(at(2), "2.3");
        assert_eq!(at(4), "2.303");
        assert_eq!(at(8), "2.3025851");
        assert_eq!(at(16), "2.302585092994046");
    }

    #[test]
    fn half_up_ties_away_from_zero() {
        assert_eq!(round("0.125", 2, Rounding::HalfUp), "0.13");
        assert_eq!(round("-0.125", 2, Rounding::HalfUp), "-0.13");
        assert_eq!(round("0.124", 2, Rounding::HalfUp), "0.12");
    }

    #[test]
    fn other_modes_on_a_tie() {
        assert_eq!(round("0.125", 2, Rounding::HalfEven), "0.12");
        assert_eq!(round("0.135", 2, Rounding::HalfEven), "0.14");
        assert_eq!(round("0.125", 2, Rounding::HalfDown), "0.12");
        assert_eq!(round("0.121", 2, Rounding::Up), "0.13");
        assert_eq!(round("0.129", 2, Rounding::Down), "0.12");
        assert_eq!(round("-0.121", 2, Rounding::Ceiling), "-0.12");
        assert_eq!(round("-0.121", 2, Rounding::Floor), "-0.13");
    }

    #[test]
    fn carry_drops_a_digit() {
        let r = Context::with_precision(2).round(&dec("9.99")).unwrap();
        assert_eq!(r, Decimal::new(10, 0));
        assert_eq!(r.num_digits(), 2);
    }

    #[test]
    fn short_values_are_untouched() {
        let x = dec("1.072302");
        assert_eq!(Context::with_precision(64).round(&x).unwrap(), x);
        assert_eq!(Context::default().round(&x).unwrap(), x);
    }

    #[test]
    fn overflow_and_underflow() {
        let ctx = Context {
            precision: 3,
            max_exponent: 5,
            min_exponent: -5,
            ..Context::default()
        };
        assert_eq!(
            ctx.round(&dec("1234567")),
            Err(RoundError::Overflow { adjusted: 6, max: 5 })
        );
        assert_eq!(
            ctx.round(&dec("1E-10")),
            Err(RoundError::Underflow { adjusted: -10, min: -5 })
        );
        assert_eq!(ctx.round(&dec("123456")).unwrap().to_string(), "1.23E+5");
    }

    #[test]
    fn rounding_serde_names() {
        let json = serde_json::to_string(&Rounding::HalfEven).unwrap();
        assert_eq!(json, "\"half_even\"");
        let back: Rounding = serde_json::from_str("\"half_up\"").unwrap();
        assert_eq!(back, Rounding::HalfUp);
    }

    proptest! {
        #[test]
        fn never_exceeds_precision(coeff in 0i64..i64::MAX, exp in -50i32..50, p in 1u32..25) {
            let x = Decimal::new(coeff, exp);
            let r = Context::with_precision(p).round(&x).unwrap();
            prop_assert!(r.num_digits() <= p);
        }

        #[test]
        fn half_up_is_deterministic(p in 1u32..200) {
            let x = dec(literals::INV_LN10);
            let ctx = Context::with_precision(p);
            prop_assert_eq!(ctx.round(&x).unwrap(), ctx.round(&x).unwrap());
        }
    }
}
