//! Small formatting helpers for user-facing messages

use once_cell::sync::Lazy;
use regex::Regex;

// printf-style conversions: position, sign, padding, width, precision, type
static SPRINTF_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%(?:\d+\$)?[+-]?(?:[ 0]|'.)?-?\d*(?:\.\d+)?[bcdeEufFgGosxX]")
        .expect("sprintf pattern is valid")
});

/// Trim surrounding whitespace; a missing value becomes the empty string.
pub fn strip(value: Option<&str>) -> &str {
    value.map_or("", str::trim)
}

/// Join items as an English list with a serial comma.
///
/// `["a", "b", "c"]` becomes `"a, b, and c"`; two items are joined with `" and "`.
pub fn oxfordize_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|item| item.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Number of printf-style placeholders (`%s`, `%1$d`, `%+.2f`, ...) in `value`.
pub fn count_sprintf_parameters(value: &str) -> usize {
    SPRINTF_PLACEHOLDER.find_iter(value).count()
}
