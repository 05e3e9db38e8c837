//! Soft line-break insertion for long technical strings
//!
//! Dotted paths and call chains (`com.example.Foo.bar(baz)`) contain no whitespace, so
//! a renderer has nowhere to wrap them. [`soft_break`] cuts such strings after each run
//! of `.`, `(` or `)` and joins the pieces with U+200B ZERO WIDTH SPACE. Pieces that are
//! still too long can additionally be hyphenated with U+00AD SOFT HYPHEN through
//! [`soft_break_with`].
//!
//! Both markers are invisible unless a wrap happens, and [`strip_soft_breaks`] removes
//! them again to recover the input exactly.

use crate::chars::{is_break_delimiter, is_soft_break_marker, SOFT_HYPHEN, ZERO_WIDTH_SPACE};

/// Insert wrap opportunities after delimiter runs, leaving long pieces intact.
pub fn soft_break(text: &str, length: usize) -> String {
    join_pieces(text, length, None)
}

/// Like [`soft_break`], but pieces longer than `length` chars are passed (without their
/// trailing delimiters) through `hyphenate`.
///
/// A `length` of 0 disables hyphenation.
pub fn soft_break_with<F>(text: &str, length: usize, hyphenate: F) -> String
where
    F: Fn(&str, usize) -> String,
{
    let hyphenate: &dyn Fn(&str, usize) -> String = &hyphenate;
    join_pieces(text, length, Some(hyphenate))
}

/// Split `segment` into chunks of `length` chars joined by soft hyphens.
///
/// The last chunk may be shorter. A `length` of 0 returns the segment unchanged.
pub fn soft_hyphenate(segment: &str, length: usize) -> String {
    if length == 0 {
        return segment.to_string();
    }
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len() + chars.len() / length * 2);
    for (i, chunk) in chars.chunks(length).enumerate() {
        if i > 0 {
            out.push(SOFT_HYPHEN);
        }
        out.extend(chunk);
    }
    out
}

/// Remove every zero-width space and soft hyphen from `text`.
pub fn strip_soft_breaks(text: &str) -> String {
    text.chars().filter(|&c| !is_soft_break_marker(c)).collect()
}

fn join_pieces(
    text: &str,
    length: usize,
    hyphenate: Option<&dyn Fn(&str, usize) -> String>,
) -> String {
    let hyphenate = hyphenate.filter(|_| length > 0);
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    for (i, piece) in split_after_delimiters(text).into_iter().enumerate() {
        if i > 0 {
            out.push(ZERO_WIDTH_SPACE);
        }
        match hyphenate {
            Some(hyphenate) if piece.chars().count() > length => {
                let (core, delimiters) = split_trailing_delimiters(piece);
                out.push_str(&hyphenate(core, length));
                out.push_str(delimiters);
            }
            _ => out.push_str(piece),
        }
    }

    out
}

/// Cut `text` right after every maximal run of break delimiters.
fn split_after_delimiters(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut after_delimiter = false;

    for (idx, c) in text.char_indices() {
        if is_break_delimiter(c) {
            after_delimiter = true;
        } else if after_delimiter {
            pieces.push(&text[start..idx]);
            start = idx;
            after_delimiter = false;
        }
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

/// Split a piece into its core text and trailing delimiter run.
fn split_trailing_delimiters(piece: &str) -> (&str, &str) {
    let core = piece.trim_end_matches(is_break_delimiter);
    (core, &piece[core.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZWSP: &str = "\u{200b}";
    const SHY: &str = "\u{00ad}";

    #[test]
    fn test_soft_break() {
        let result = soft_break(
            "com.example.package.method(argument).anotherMethod(argument)",
            15,
        );
        let expected = [
            "com.",
            "example.",
            "package.",
            "method(",
            "argument).",
            "anotherMethod(",
            "argument)",
        ]
        .join(ZWSP);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_soft_break_and_hyphenate() {
        let result = soft_break_with("com.reallyreallyreally.long.path", 6, soft_hyphenate);
        let really = format!("{}.", ["really"; 3].join(SHY));
        let expected = ["com.", really.as_str(), "long.", "path"].join(ZWSP);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_long_pieces_kept_without_hyphenator() {
        let result = soft_break("com.reallyreallyreally.long", 6);
        assert_eq!(result, ["com.", "reallyreallyreally.", "long"].join(ZWSP));
    }

    #[test]
    fn test_zero_length_disables_hyphenation() {
        let result = soft_break_with("abcdefgh.ij", 0, soft_hyphenate);
        assert_eq!(result, ["abcdefgh.", "ij"].join(ZWSP));
    }

    #[test]
    fn test_no_delimiters() {
        assert_eq!(soft_break("plain words here", 4), "plain words here");
        assert_eq!(soft_break("", 4), "");
    }

    #[test]
    fn test_leading_and_only_delimiters() {
        assert_eq!(soft_break(".hidden", 10), [".", "hidden"].join(ZWSP));
        assert_eq!(soft_break("...", 10), "...");
    }

    #[test]
    fn test_custom_hyphenator_sees_core_only() {
        let result = soft_break_with("abcdefgh().x", 3, |core, _| format!("<{core}>"));
        assert_eq!(result, ["<abcdefgh>().", "x"].join(ZWSP));
    }

    #[test]
    fn test_soft_hyphenate() {
        assert_eq!(soft_hyphenate("abcdefg", 3), ["abc", "def", "g"].join(SHY));
        assert_eq!(soft_hyphenate("abc", 3), "abc");
        assert_eq!(soft_hyphenate("", 3), "");
        assert_eq!(soft_hyphenate("abc", 0), "abc");
        // Counts chars, not bytes
        assert_eq!(soft_hyphenate("äöüß", 2), ["äö", "üß"].join(SHY));
    }

    #[test]
    fn test_strip_soft_breaks() {
        let text = "com.reallyreallyreally.long.path";
        assert_eq!(strip_soft_breaks(&soft_break_with(text, 4, soft_hyphenate)), text);
    }
}
