//! Character classification shared by the text utilities

/// U+200B, the invisible line-wrap opportunity inserted by the soft breaker.
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// U+00AD, shown as a hyphen only when a line actually wraps at it.
pub const SOFT_HYPHEN: char = '\u{00ad}';

/// Symbols allowed in a dot-atom besides ASCII letters and digits (RFC 5322 atext).
pub const ATEXT_SYMBOLS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Category of a character inside an alphanumeric run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    /// Lowercase letters and letters without case
    Lower,
    Digit,
}

/// Classify one character of an alphanumeric run.
///
/// Callers split on `!char::is_alphanumeric` first; anything that is neither numeric
/// nor uppercase lands in [`CharClass::Lower`].
pub fn classify(c: char) -> CharClass {
    if c.is_numeric() {
        CharClass::Digit
    } else if c.is_uppercase() {
        CharClass::Upper
    } else {
        CharClass::Lower
    }
}

/// Characters after which the soft breaker may place a wrap opportunity.
pub fn is_break_delimiter(c: char) -> bool {
    matches!(c, '.' | '(' | ')')
}

/// Markers inserted by the soft breaker.
pub fn is_soft_break_marker(c: char) -> bool {
    c == ZERO_WIDTH_SPACE || c == SOFT_HYPHEN
}
