//! Table-driven cases for each utility, covering the behaviors callers rely on.

use rstest::rstest;
use textnorm::{
    is_valid_dot_atom, lookup, resolve, tokens_from_name, truncate, truncate_chars,
    CallsignChoices, CallsignOptions, DEFAULT_ELLIPSIS,
};

#[rstest]
#[case("utf-8", "utf-8")]
#[case("utf8", "utf-8")]
#[case("UTF-8", "utf-8")]
#[case("zlib", "utf-8")]
#[case("utf16", "utf-16")]
#[case("undefined", "utf-8")]
#[case("latin1", "iso8859-1")]
#[case("ISO-8859-15", "iso8859-15")]
#[case("windows-1252", "cp1252")]
#[case("Shift_JIS", "shift_jis")]
fn codec_lookup_with_utf8_fallback(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(lookup(name).map(|c| c.name()), Some(expected));
}

#[rstest]
#[case("undefined", Some("latin1"), Some("iso8859-1"))]
#[case("zlib", Some("latin1"), Some("iso8859-1"))]
#[case("unknownstuff", Some("latin1"), Some("iso8859-1"))]
#[case("undefined", None, None)]
#[case("base64", None, None)]
#[case("undefined", Some("bz2"), None)]
#[case("ascii", None, Some("ascii"))]
fn codec_resolve_with_explicit_default(
    #[case] name: &str,
    #[case] default: Option<&str>,
    #[case] expected: Option<&str>,
) {
    assert_eq!(resolve(name, default).map(|c| c.name()), expected);
}

#[test]
fn codec_aliases_share_a_descriptor() {
    assert_eq!(lookup("utf8"), lookup("utf-8"));
    assert_eq!(lookup("latin-1"), lookup("iso8859_1"));
    assert_ne!(lookup("utf-16"), lookup("utf-8"));
}

#[rstest]
#[case("MyHTTPProject42", false, &["my", "http", "project42"])]
#[case("MyHTTPProject42", true, &["my", "http", "project"])]
#[case(
    "MyHTTPProject Awesome 42 Stuff",
    false,
    &["my", "http", "project", "awesome", "42", "stuff"]
)]
#[case("MyHTTPProject Awesome 42 Stuff", true, &["my", "http", "project", "awesome", "stuff"])]
#[case("XMLHttpRequest", false, &["xml", "http", "request"])]
#[case("getURLForID", false, &["get", "url", "for", "id"])]
#[case("sentry-plugins_v2", false, &["sentry", "plugins", "v2"])]
fn tokens(#[case] name: &str, #[case] remove_digits: bool, #[case] expected: &[&str]) {
    assert_eq!(tokens_from_name(name, remove_digits), expected);
}

#[rstest]
#[case("FooBar", &["FB", "FB2", "FB3", "FB4"])]
#[case("FooBarBaz", &["FBB", "FBB2", "FBB3", "FBB4"])]
#[case("Grml", &["GR", "GRM", "GR2", "GRM2"])]
#[case("42", &["PR", "PR2", "PR3"])]
#[case("my-great-web-app", &["MGWA", "MGWA2"])]
fn callsign_candidates(#[case] name: &str, #[case] expected: &[&str]) {
    let candidates: Vec<String> = CallsignChoices::new(name).take(expected.len()).collect();
    assert_eq!(candidates, expected);
}

#[test]
fn callsign_skips_reserved_codes() {
    let options = CallsignOptions::new().disallow(["GH"]);
    let mut choices = CallsignChoices::with_options("GetHub", &options);
    assert_eq!(choices.next().as_deref(), Some("GH2"));
    assert_eq!(choices.next().as_deref(), Some("GH3"));
}

#[rstest]
#[case("foo", true)]
#[case("foo.bar", true)]
#[case("o'reilly", true)]
#[case(".foo.bar", false)]
#[case("foo.bar.", false)]
#[case("foo..bar", false)]
#[case("foo.\x00", false)]
#[case("", false)]
fn dot_atoms(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(is_valid_dot_atom(value), valid);
}

#[rstest]
#[case(6, "...", "12345")]
#[case(5, "...", "12345")]
#[case(4, "...", "1...")]
#[case(3, "...", "...")]
#[case(2, "...", "...")]
#[case(1, "...", "...")]
#[case(0, "...", "...")]
#[case(6, "\u{2026}", "12345")]
#[case(5, "\u{2026}", "12345")]
#[case(4, "\u{2026}", "123\u{2026}")]
#[case(3, "\u{2026}", "12\u{2026}")]
#[case(2, "\u{2026}", "1\u{2026}")]
#[case(1, "\u{2026}", "\u{2026}")]
#[case(0, "\u{2026}", "\u{2026}")]
fn truncation(#[case] max: usize, #[case] ellipsis: &str, #[case] expected: &str) {
    assert_eq!(truncate_chars("12345", max, ellipsis), expected);
}

#[test]
fn truncation_of_missing_value() {
    assert_eq!(truncate(None, 1, DEFAULT_ELLIPSIS), None);
    assert_eq!(truncate(None, 0, DEFAULT_ELLIPSIS), None);
}
