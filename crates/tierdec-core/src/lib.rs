//! # tierdec-core
//! Decimal value, literal parsing and the rounding context consumed by the
//! tiered constant cache.
//!
//! - [`decimal::Decimal`] — exact base-10 number (sign, coefficient, exponent)
//! - [`context::Context`] — "round to N significant digits" within exponent bounds
//! - [`traits::PrecisionSource`] — precision-parameterized constant lookup
//! - [`literals`] — full-precision built-in constant strings

pub mod context;
pub mod decimal;
pub mod error;
pub mod literals;
pub mod traits;

pub use context::{Context, Rounding, MAX_EXPONENT, MIN_EXPONENT};
pub use decimal::Decimal;
pub use error::{ConstantError, ParseError, RoundError, TierdecError};
pub use traits::PrecisionSource;
