//! Constant registry: parse trusted built-in literals exactly once.
//!
//! Literals are library data, never caller input. A literal that fails to
//! parse is a defect in the shipped library, so [`register_constant`]
//! aborts instead of handing an error to a caller who cannot fix it.

use tierdec_core::{ConstantError, Decimal};
use tracing::error;

/// Characters of a literal kept in error messages.
const LITERAL_PREVIEW: usize = 24;

/// Parse `literal`, reporting failure as a [`ConstantError`].
pub fn try_register_constant(literal: &str) -> Result<Decimal, ConstantError> {
    literal.parse().map_err(|source| ConstantError::Parse {
        literal: preview(literal),
        source,
    })
}

/// Parse a built-in `literal`.
///
/// # Panics
///
/// Panics if the literal is malformed.
///
/// # Examples
///
/// ```
/// use tierdec_cache::register_constant;
/// assert_eq!(register_constant("1.072302").to_string(), "1.072302");
/// ```
pub fn register_constant(literal: &str) -> Decimal {
    match try_register_constant(literal) {
        Ok(value) => value,
        Err(err) => fatal(err),
    }
}

/// Abort initialization on a broken built-in constant.
pub(crate) fn fatal(err: ConstantError) -> ! {
    error!(%err, "registry: invalid built-in constant");
    panic!("invalid built-in constant: {err}");
}

fn preview(literal: &str) -> String {
    match literal.char_indices().nth(LITERAL_PREVIEW) {
        Some((end, _)) => format!("{}...", &literal[..end]),
        None => literal.to_string(),
    }
}
