//! Dot-atom-text validation (the unquoted form of an email local part)

use crate::chars::ATEXT_SYMBOLS;
use once_cell::sync::Lazy;
use regex::Regex;

static DOT_ATOM: Lazy<Regex> = Lazy::new(|| {
    let atext = format!("[A-Za-z0-9{}]+", regex::escape(ATEXT_SYMBOLS));
    Regex::new(&format!(r"\A{atext}(?:\.{atext})*\z")).expect("dot-atom pattern is valid")
});

/// `true` if `value` is one or more atext atoms joined by single dots.
///
/// Control characters, whitespace, leading/trailing dots and empty atoms all fail.
pub fn is_valid_dot_atom(value: &str) -> bool {
    DOT_ATOM.is_match(value)
}
