/// Numeric literal parsing helpers.
///
/// This module provides the parsing routine that turns a number token's
/// accumulated text into an `f64`, tolerating the truncated literals that
/// lexical error recovery can legitimately produce.
pub mod num;
