//! Name tokenization
//!
//! Splits identifiers and phrases into lowercase word tokens. Runs of alphanumeric
//! characters are segmented on camelCase and acronym boundaries:
//!
//! ```text
//! "MyHTTPProject42"          -> my | http | project42
//! "HTTPServer"               -> http | server
//! "MyHTTPProject Awesome 42" -> my | http | project | awesome | 42
//! ```
//!
//! An uppercase run is a single token unless a lowercase letter follows it, in which
//! case its last capital starts the next word. Digits stick to the token they follow.

use crate::chars::{classify, CharClass};

/// Split `name` into lowercase tokens, left to right.
///
/// With `remove_digits`, digits are dropped before segmentation: a digit suffix simply
/// disappears and an all-digit run yields no token.
pub fn tokens_from_name(name: &str, remove_digits: bool) -> Vec<String> {
    let mut tokens = Vec::new();
    for run in name.split(|c: char| !c.is_alphanumeric()) {
        if !run.is_empty() {
            segment_run(run, remove_digits, &mut tokens);
        }
    }
    tokens
}

fn segment_run(run: &str, remove_digits: bool, tokens: &mut Vec<String>) {
    let chars: Vec<char> = run
        .chars()
        .filter(|&c| !(remove_digits && classify(c) == CharClass::Digit))
        .collect();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        match classify(chars[i]) {
            CharClass::Upper => {
                let end = chars[i..]
                    .iter()
                    .position(|&c| classify(c) != CharClass::Upper)
                    .map_or(chars.len(), |offset| i + offset);
                let starts_word = end < chars.len() && classify(chars[end]) == CharClass::Lower;
                let acronym_end = if starts_word { end - 1 } else { end };

                flush(&mut current, tokens);
                if acronym_end > i {
                    current.extend(&chars[i..acronym_end]);
                    if starts_word {
                        flush(&mut current, tokens);
                    }
                }
                if starts_word {
                    current.push(chars[end - 1]);
                }
                i = end;
            }
            CharClass::Lower | CharClass::Digit => {
                current.push(chars[i]);
                i += 1;
            }
        }
    }

    flush(&mut current, tokens);
}

// Lowercasing can add combining marks (`İ` becomes `i` + U+0307), which would split
// the token on a second pass. Only alphanumerics are kept.
fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let token: String = current
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    if !token.is_empty() {
        tokens.push(token);
    }
    current.clear();
}
