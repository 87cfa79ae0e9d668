//! Exact base-10 numbers.
//!
//! A [`Decimal`] is `(-1)^negative × coefficient × 10^exponent` with an
//! unbounded coefficient. Only the operations the constant cache needs are
//! provided: construction, parsing, digit counting and formatting.
//! Rounding lives in [`crate::context`].

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::ParseError;

/// An exact decimal number.
///
/// Equality is structural: `1.0` and `1.00` have different coefficients and
/// exponents and therefore compare unequal. Rounded constant tiers are
/// compared this way to check that construction is deterministic.
///
/// # Examples
///
/// ```
/// use tierdec_core::Decimal;
/// let d: Decimal = "0.125".parse().unwrap();
/// assert_eq!(d, Decimal::new(125, -3));
/// assert_eq!(d.num_digits(), 3);
/// assert_eq!(d.to_string(), "0.125");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    negative: bool,
    coefficient: BigUint,
    exponent: i32,
}

impl Decimal {
    /// `coefficient × 10^exponent` from a machine integer.
    pub fn new(coefficient: i64, exponent: i32) -> Self {
        Self {
            negative: coefficient < 0,
            coefficient: BigUint::from(coefficient.unsigned_abs()),
            exponent,
        }
    }

    pub fn from_parts(negative: bool, coefficient: BigUint, exponent: i32) -> Self {
        Self {
            negative,
            coefficient,
            exponent,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn coefficient(&self) -> &BigUint {
        &self.coefficient
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Number of significant digits in the coefficient. Zero has one digit.
    pub fn num_digits(&self) -> u32 {
        digit_count(&self.coefficient)
    }

    /// Exponent of the most significant digit: `exponent + num_digits - 1`.
    ///
    /// This is the quantity the engine's exponent bounds apply to.
    pub fn adjusted_exponent(&self) -> i64 {
        i64::from(self.exponent) + i64::from(self.num_digits()) - 1
    }
}

/// Decimal digit count of a coefficient.
pub(crate) fn digit_count(n: &BigUint) -> u32 {
    if n.is_zero() {
        return 1;
    }
    u32::try_from(n.to_str_radix(10).len()).unwrap_or(u32::MAX)
}

impl FromStr for Decimal {
    type Err = ParseError;

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`.
    ///
    /// Special values (`NaN`, `Infinity`) are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let (negative, start) = match s.as_bytes()[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };

        let body = &s[start..];
        let (mantissa, exponent_text) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };

        let mut digits = String::with_capacity(mantissa.len());
        let mut fraction_digits: i64 = 0;
        let mut seen_point = false;
        for (offset, ch) in mantissa.char_indices() {
            match ch {
                '0'..='9' => {
                    digits.push(ch);
                    if seen_point {
                        fraction_digits += 1;
                    }
                }
                '.' if !seen_point => seen_point = true,
                _ => {
                    return Err(ParseError::InvalidCharacter {
                        ch,
                        index: start + offset,
                    });
                }
            }
        }
        if digits.is_empty() {
            return Err(ParseError::MissingDigits);
        }

        let scale = match exponent_text {
            Some(text) => text
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidExponent(text.to_string()))?,
            None => 0,
        };
        let exponent = scale.saturating_sub(fraction_digits);
        let exponent =
            i32::try_from(exponent).map_err(|_| ParseError::ExponentOutOfRange(exponent))?;

        let coefficient =
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(ParseError::MissingDigits)?;

        Ok(Self {
            negative,
            coefficient,
            exponent,
        })
    }
}

impl fmt::Display for Decimal {
    /// Scientific-string form: plain notation when `exponent <= 0` and the
    /// adjusted exponent is at least -6, otherwise `d.dddE±n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.to_str_radix(10);
        let adjusted = self.adjusted_exponent();
        let sign = if self.negative { "-" } else { "" };

        if self.exponent <= 0 && adjusted >= -6 {
            if self.exponent == 0 {
                return write!(f, "{sign}{digits}");
            }
            let point = digits.len() as i64 + i64::from(self.exponent);
            if point > 0 {
                let (int, frac) = digits.split_at(point as usize);
                return write!(f, "{sign}{int}.{frac}");
            }
            let zeros = "0".repeat((-point) as usize);
            return write!(f, "{sign}0.{zeros}{digits}");
        }

        let (first, rest) = digits.split_at(1);
        let exp_sign = if adjusted < 0 { '-' } else { '+' };
        if rest.is_empty() {
            write!(f, "{sign}{first}E{exp_sign}{}", adjusted.unsigned_abs())
        } else {
            write!(f, "{sign}{first}.{rest}E{exp_sign}{}", adjusted.unsigned_abs())
        }
    }
}
