//! Broken built-in data must stop initialization, never yield a partial
//! ladder.

use tierdec_cache::{register_constant, try_register_constant, CacheConfig, TieredConstant};
use tierdec_core::{ConstantError, RoundError, TierdecError};

#[test]
#[should_panic(expected = "invalid built-in constant")]
fn malformed_literal_panics_in_build() {
    TieredConstant::build("0.43429448190325182765112891891660508229439700580366656611X");
}

#[test]
#[should_panic(expected = "invalid built-in constant")]
fn malformed_small_constant_panics() {
    register_constant("1.07,2302");
}

#[test]
fn fallible_twins_surface_errors() {
    assert!(try_register_constant("NaN").is_err());
    assert!(TieredConstant::try_build("", &CacheConfig::default()).is_err());
}

#[test]
fn rounding_failure_names_the_tier() {
    let cfg = CacheConfig {
        min_exponent: -3,
        ..CacheConfig::default()
    };
    match TieredConstant::try_build("0.00012345", &cfg) {
        Err(ConstantError::Round { precision, source }) => {
            assert_eq!(precision, 1);
            assert!(matches!(source, RoundError::Underflow { adjusted: -4, min: -3 }));
        }
        other => panic!("expected round error, got {other:?}"),
    }
}

#[test]
fn errors_convert_into_aggregate() {
    let err = try_register_constant("--1").unwrap_err();
    let agg: TierdecError = err.into();
    assert!(agg.to_string().starts_with("constant \"--1\""));
}
