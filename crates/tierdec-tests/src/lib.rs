//! Cross-crate test suite for tierdec.
//!
//! Integration tests that exercise the process-wide constant tables the way
//! consuming algorithms do: through `get`, through the `PrecisionSource`
//! trait, and from many threads at once.

pub mod helpers;
