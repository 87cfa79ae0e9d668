//! Error types for tierdec.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty decimal literal")] Empty,
    #[error("no digits in coefficient")] MissingDigits,
    #[error("invalid character {ch:?} at index {index}")] InvalidCharacter { ch: char, index: usize },
    #[error("invalid exponent: {0}")] InvalidExponent(String),
    #[error("exponent out of range: {0}")] ExponentOutOfRange(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("overflow: adjusted exponent {adjusted} > {max}")] Overflow { adjusted: i64, max: i32 },
    #[error("underflow: adjusted exponent {adjusted} < {min}")] Underflow { adjusted: i64, min: i32 },
    #[error("exponent out of range after rounding")] ExponentOutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstantError {
    #[error("constant {literal:?}: {source}")] Parse { literal: String, source: ParseError },
    #[error("constant tier at precision {precision}: {source}")] Round { precision: u32, source: RoundError },
}

#[derive(Error, Debug)]
pub enum TierdecError {
    #[error(transparent)] Parse(#[from] ParseError),
    #[error(transparent)] Round(#[from] RoundError),
    #[error(transparent)] Constant(#[from] ConstantError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_error_names_literal() {
        let err = ConstantError::Parse {
            literal: "1.2x".to_string(),
            source: ParseError::InvalidCharacter { ch: 'x', index: 3 },
        };
        assert_eq!(
            err.to_string(),
            "constant \"1.2x\": invalid character 'x' at index 3"
        );
    }

    #[test]
    fn aggregate_is_transparent() {
        let err: TierdecError = RoundError::Overflow { adjusted: 7, max: 5 }.into();
        assert_eq!(err.to_string(), "overflow: adjusted exponent 7 > 5");
        assert!(matches!(err, TierdecError::Round(_)));
    }
}
