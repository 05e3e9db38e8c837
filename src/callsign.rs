//! Callsign candidate generation
//!
//! A callsign is a short uppercase abbreviation for a project name. [`CallsignChoices`]
//! enumerates candidates lazily and forever; the caller pulls until it finds one that
//! is free in its own namespace.
//!
//! Candidates are built from the name's tokens (digits removed):
//!
//! - two or more tokens: the initials, `FooBarBaz -> FBB, FBB2, FBB3, ...`
//! - one token: its 2- and 3-letter prefixes, cycled per suffix tier,
//!   `Grml -> GR, GRM, GR2, GRM2, GR3, ...`
//! - no usable letters: [`DEFAULT_CALLSIGN`], `PR, PR2, PR3, ...`
//!
//! Disallowed candidates are skipped without renumbering the ones that follow.

use crate::error::{Error, Result};
use crate::tokens::tokens_from_name;
use std::collections::HashSet;
use tracing::trace;

/// Base used when a name has no letters to abbreviate.
pub const DEFAULT_CALLSIGN: &str = "PR";

/// Longest prefix used for single-word names unless configured otherwise.
pub const DEFAULT_MAX_PREFIX_LEN: usize = 3;

const MIN_PREFIX_LEN: usize = 2;

/// Knobs for [`CallsignChoices`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallsignOptions {
    max_prefix_len: usize,
    disallowed: HashSet<String>,
}

impl CallsignOptions {
    pub fn new() -> Self {
        CallsignOptions {
            max_prefix_len: DEFAULT_MAX_PREFIX_LEN,
            disallowed: HashSet::new(),
        }
    }

    /// Add codes that must never be yielded. Matching is case-insensitive.
    pub fn disallow<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disallowed
            .extend(codes.into_iter().map(|code| code.as_ref().to_uppercase()));
        self
    }

    /// Set the longest prefix tried for single-word names. Must be at least 2.
    pub fn with_max_prefix_len(mut self, max_prefix_len: usize) -> Result<Self> {
        if max_prefix_len < MIN_PREFIX_LEN {
            return Err(Error::InvalidPrefixLength(max_prefix_len));
        }
        self.max_prefix_len = max_prefix_len;
        Ok(self)
    }

    pub fn max_prefix_len(&self) -> usize {
        self.max_prefix_len
    }

    pub fn is_disallowed(&self, candidate: &str) -> bool {
        self.disallowed.contains(candidate)
    }
}

impl Default for CallsignOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Infinite iterator over callsign candidates for one name.
///
/// `next()` never returns `None`.
#[derive(Debug, Clone)]
pub struct CallsignChoices {
    bases: Vec<String>,
    disallowed: HashSet<String>,
    // 0 is the unsuffixed tier, tier n carries the suffix n + 1
    tier: usize,
    index: usize,
}

impl CallsignChoices {
    /// Candidates for `name` with default options and nothing disallowed.
    pub fn new(name: &str) -> Self {
        Self::with_options(name, &CallsignOptions::default())
    }

    pub fn with_options(name: &str, options: &CallsignOptions) -> Self {
        CallsignChoices {
            bases: base_candidates(name, options.max_prefix_len),
            disallowed: options.disallowed.clone(),
            tier: 0,
            index: 0,
        }
    }

    /// Unsuffixed candidates in the order each tier visits them.
    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    fn advance(&mut self) -> String {
        let base = &self.bases[self.index];
        let candidate = if self.tier == 0 {
            base.clone()
        } else {
            format!("{base}{}", self.tier + 1)
        };
        self.index += 1;
        if self.index == self.bases.len() {
            self.index = 0;
            self.tier += 1;
        }
        candidate
    }
}

impl Iterator for CallsignChoices {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // The disallowed set is finite, so some later tier always gets through
        loop {
            let candidate = self.advance();
            if self.disallowed.contains(&candidate) {
                trace!(%candidate, "skipping disallowed callsign");
                continue;
            }
            return Some(candidate);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Candidates for `name` with default options.
pub fn callsign_choices(name: &str) -> CallsignChoices {
    CallsignChoices::new(name)
}

fn base_candidates(name: &str, max_prefix_len: usize) -> Vec<String> {
    let words = tokens_from_name(name, true);
    let bases = match words.as_slice() {
        [] => Vec::new(),
        [word] => {
            let letters: Vec<char> = word.chars().collect();
            (MIN_PREFIX_LEN..=max_prefix_len.min(letters.len()))
                .map(|len| letters[..len].iter().collect::<String>().to_uppercase())
                .collect()
        }
        words => vec![words
            .iter()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()],
    };

    if bases.is_empty() {
        vec![DEFAULT_CALLSIGN.to_string()]
    } else {
        bases
    }
}
