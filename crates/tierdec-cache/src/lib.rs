//! # tierdec-cache — Precision-tiered constant cache.
//!
//! Transcendental and division algorithms need fixed constants to as many
//! digits as their working precision, and no more. This crate parses the
//! built-in literals once and, for the expensive ones, keeps a ladder of
//! copies rounded to 1, 2, 4, 8, … significant digits:
//! - **Constant registry**: trusted literals are parsed exactly once; a
//!   malformed literal aborts initialization.
//! - **Tiered lookup**: `get(p)` returns the coarsest tier with at least
//!   `p` digits, or the full value beyond the ladder. Integer-only, O(1).
//! - **Frozen statics**: every constant is a lazily-initialized-once static
//!   and never changes after construction.

pub mod config;
pub mod constants;
pub mod registry;
pub mod tiered;

pub use config::{CacheConfig, LadderBound};
pub use constants::{init, NamedConstant};
pub use registry::{register_constant, try_register_constant};
pub use tiered::{tier_index, TieredConstant};
