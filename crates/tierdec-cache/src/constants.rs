//! Process-wide constant tables.
//!
//! Every constant is a `Lazy` static: the first reader runs construction
//! under a one-time initialization barrier and all later readers see the
//! frozen value. Call [`init`] at startup to pay the construction cost
//! before any other subsystem runs.

use std::fmt;

use num_bigint::BigUint;
use once_cell::sync::Lazy;
use tierdec_core::{literals, Decimal};
use tracing::{debug, info};

use crate::registry::register_constant;
use crate::tiered::TieredConstant;

pub static BIG_ONE: Lazy<BigUint> = Lazy::new(|| BigUint::from(1u32));
pub static BIG_TWO: Lazy<BigUint> = Lazy::new(|| BigUint::from(2u32));
pub static BIG_FIVE: Lazy<BigUint> = Lazy::new(|| BigUint::from(5u32));
pub static BIG_TEN: Lazy<BigUint> = Lazy::new(|| BigUint::from(10u32));

pub static ZERO: Lazy<Decimal> = Lazy::new(|| Decimal::new(0, 0));
pub static ONE_EIGHTH: Lazy<Decimal> = Lazy::new(|| Decimal::new(125, -3));
pub static HALF: Lazy<Decimal> = Lazy::new(|| Decimal::new(5, -1));
pub static ONE: Lazy<Decimal> = Lazy::new(|| Decimal::new(1, 0));
pub static TWO: Lazy<Decimal> = Lazy::new(|| Decimal::new(2, 0));
pub static THREE: Lazy<Decimal> = Lazy::new(|| Decimal::new(3, 0));
pub static EIGHT: Lazy<Decimal> = Lazy::new(|| Decimal::new(8, 0));

// Cube-root starting polynomial c1*x^2 + c2*x + c3.
pub static CBRT_C1: Lazy<Decimal> = Lazy::new(|| register_constant(literals::CBRT_C1));
pub static CBRT_C2: Lazy<Decimal> = Lazy::new(|| register_constant(literals::CBRT_C2));
pub static CBRT_C3: Lazy<Decimal> = Lazy::new(|| register_constant(literals::CBRT_C3));

/// ln(10).
pub static LN10: Lazy<TieredConstant> = Lazy::new(|| NamedConstant::Ln10.build());
/// 1 / ln(10).
pub static INV_LN10: Lazy<TieredConstant> = Lazy::new(|| NamedConstant::InvLn10.build());
/// 48/17, reciprocal Newton seed.
pub static QUO_C1: Lazy<TieredConstant> = Lazy::new(|| NamedConstant::QuoC1.build());
/// 32/17, reciprocal Newton seed.
pub static QUO_C2: Lazy<TieredConstant> = Lazy::new(|| NamedConstant::QuoC2.build());

/// The constants long enough to be served through a precision ladder.
///
/// # Examples
///
/// ```
/// use tierdec_cache::NamedConstant;
/// let c = NamedConstant::Ln10.cache();
/// assert_eq!(c.get(4).to_string(), "2.303");
/// assert_eq!(NamedConstant::Ln10.name(), "ln10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedConstant {
    Ln10,
    InvLn10,
    QuoC1,
    QuoC2,
}

impl NamedConstant {
    pub const ALL: [Self; 4] = [Self::Ln10, Self::InvLn10, Self::QuoC1, Self::QuoC2];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ln10 => "ln10",
            Self::InvLn10 => "inv_ln10",
            Self::QuoC1 => "quo_c1",
            Self::QuoC2 => "quo_c2",
        }
    }

    /// Full-precision source literal.
    pub fn literal(self) -> &'static str {
        match self {
            Self::Ln10 => literals::LN10,
            Self::InvLn10 => literals::INV_LN10,
            Self::QuoC1 => literals::QUO_C1,
            Self::QuoC2 => literals::QUO_C2,
        }
    }

    /// The process-wide ladder for this constant.
    pub fn cache(self) -> &'static TieredConstant {
        match self {
            Self::Ln10 => Lazy::force(&LN10),
            Self::InvLn10 => Lazy::force(&INV_LN10),
            Self::QuoC1 => Lazy::force(&QUO_C1),
            Self::QuoC2 => Lazy::force(&QUO_C2),
        }
    }

    fn build(self) -> TieredConstant {
        let constant = TieredConstant::build(self.literal());
        debug!(
            constant = self.name(),
            tiers = constant.len(),
            "constants: ladder ready"
        );
        constant
    }
}

impl fmt::Display for NamedConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Force every constant table. Idempotent.
pub fn init() {
    for big in [&BIG_ONE, &BIG_TWO, &BIG_FIVE, &BIG_TEN] {
        Lazy::force(big);
    }
    for small in [
        &ZERO, &ONE_EIGHTH, &HALF, &ONE, &TWO, &THREE, &EIGHT, &CBRT_C1, &CBRT_C2, &CBRT_C3,
    ] {
        Lazy::force(small);
    }
    let tiers: usize = NamedConstant::ALL.iter().map(|c| c.cache().len()).sum();
    info!(
        constants = NamedConstant::ALL.len(),
        tiers, "constants: tables initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierdec_core::PrecisionSource;

    #[test]
    fn small_constants() {
        assert_eq!(ZERO.to_string(), "0");
        assert_eq!(ONE_EIGHTH.to_string(), "0.125");
        assert_eq!(HALF.to_string(), "0.5");
        assert_eq!(ONE.to_string(), "1");
        assert_eq!(TWO.to_string(), "2");
        assert_eq!(THREE.to_string(), "3");
        assert_eq!(EIGHT.to_string(), "8");
        assert!(ZERO.is_zero());
    }

    #[test]
    fn cube_root_coefficients() {
        assert_eq!(CBRT_C1.to_string(), "-0.46946116");
        assert_eq!(CBRT_C2.to_string(), "1.072302");
        assert_eq!(CBRT_C3.to_string(), "0.3812513");
        assert!(CBRT_C1.is_negative());
    }

    #[test]
    fn big_integer_seeds() {
        assert_eq!(*BIG_ONE, BigUint::from(1u32));
        assert_eq!(&*BIG_TWO * &*BIG_FIVE, *BIG_TEN);
    }

    #[test]
    fn named_constants_are_distinct() {
        let names: Vec<_> = NamedConstant::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["ln10", "inv_ln10", "quo_c1", "quo_c2"]);
        assert_eq!(NamedConstant::QuoC2.to_string(), "quo_c2");
    }

    #[test]
    fn cache_returns_the_static() {
        assert!(std::ptr::eq(NamedConstant::Ln10.cache(), &*LN10));
        assert!(std::ptr::eq(NamedConstant::QuoC1.cache(), &*QUO_C1));
    }

    #[test]
    fn statics_serve_lookups() {
        assert_eq!(LN10.get(4).to_string(), "2.303");
        assert_eq!(INV_LN10.get(4).to_string(), "0.4343");
        assert_eq!(QUO_C1.get(8).to_string(), "2.8235294");
        assert_eq!(QUO_C2.get(8).to_string(), "1.8823529");
        assert!(std::ptr::eq(LN10.get(10_000), LN10.unrounded()));
    }

    #[test]
    fn small_constants_are_precision_sources() {
        let c3: &Decimal = &CBRT_C3;
        assert!(std::ptr::eq(c3.at_precision(2), c3));
    }

    #[test]
    fn init_is_idempotent() {
        init();
        let before = LN10.get(64) as *const Decimal;
        init();
        assert_eq!(before, LN10.get(64) as *const Decimal);
    }
}
