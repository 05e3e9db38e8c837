//! Visible-length truncation
//!
//! Lengths are counted in chars (Unicode scalar values), so a cut never lands inside a
//! multi-byte character.

use std::borrow::Cow;

pub const DEFAULT_ELLIPSIS: &str = "...";

/// Shorten `value` to at most `max_length` chars, ending in `ellipsis`.
///
/// Values that already fit are borrowed unchanged. When `max_length` leaves no room
/// for any text next to the ellipsis the result is the ellipsis alone, so the output is
/// never longer than `max(max_length, ellipsis length)` and never empty after a cut.
pub fn truncate_chars<'a>(value: &'a str, max_length: usize, ellipsis: &str) -> Cow<'a, str> {
    let mut boundaries = value.char_indices().map(|(idx, _)| idx);
    // Byte offset of the char just past `max_length`, if the value is that long
    if boundaries.nth(max_length).is_none() {
        return Cow::Borrowed(value);
    }

    let keep = max_length.saturating_sub(ellipsis.chars().count());
    let cut = value
        .char_indices()
        .nth(keep)
        .map_or(value.len(), |(idx, _)| idx);

    let mut out = String::with_capacity(cut + ellipsis.len());
    out.push_str(&value[..cut]);
    out.push_str(ellipsis);
    Cow::Owned(out)
}

/// [`truncate_chars`] over an optional value; `None` passes straight through.
pub fn truncate<'a>(
    value: Option<&'a str>,
    max_length: usize,
    ellipsis: &str,
) -> Option<Cow<'a, str>> {
    value.map(|value| truncate_chars(value, max_length, ellipsis))
}
