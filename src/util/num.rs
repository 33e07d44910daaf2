/// Parses a number token's text into an `f64`.
///
/// Lexical error recovery can finalize a literal early, so a number token's
/// text is not always a complete literal: inputs like `1..5` or `3e*` leave
/// tokens reading `"1."` or `"3e"`, and a lone `.` survives as `"."`. The
/// longest prefix that parses as a float supplies the value; a text with no
/// such prefix is worth `0.0`.
///
/// # Parameters
/// - `text`: The accumulated token text.
///
/// # Returns
/// The parsed value, or `0.0` when no prefix of the text is a float.
///
/// # Example
/// ```
/// use rpcalc::util::num::parse_literal;
///
/// assert_eq!(parse_literal("3.25e2"), 325.0);
/// assert_eq!(parse_literal("-.5"), -0.5);
///
/// // Truncated literals fall back to their longest valid prefix.
/// assert_eq!(parse_literal("1."), 1.0);
/// assert_eq!(parse_literal("3e"), 3.0);
/// assert_eq!(parse_literal("."), 0.0);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> f64 {
    for end in (1..=text.len()).rev() {
        if !text.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = text[..end].parse() {
            return value;
        }
    }

    0.0
}
