//! # textnorm
//!
//! Small, independent text-normalization utilities for human-facing identifiers.
//!
//! - [`codec`]: resolve an encoding name to a canonical text codec, with fallback
//! - [`soft_break`]: insert zero-width break opportunities into long technical strings
//! - [`tokens`]: split mixed-case / acronym identifiers into lowercase word tokens
//! - [`callsign`]: enumerate short uppercase abbreviation candidates for a name
//! - [`dot_atom`]: validate the dot-atom-text grammar of email local parts
//! - [`truncate`]: shorten a string to a visible width with an ellipsis marker
//! - [`format`]: small list and placeholder helpers
//!
//! Every function is pure. The only stateful value is [`CallsignChoices`], a lazy
//! iterator that never terminates.
//!
//! Runtime defaults (disallowed callsigns, ellipsis, default codec) live in
//! [`config`] and are layered from the embedded `defaults/textnorm.default.toml`.

pub mod callsign;
pub mod chars;
pub mod codec;
pub mod config;
pub mod dot_atom;
pub mod error;
pub mod format;
pub mod soft_break;
pub mod tokens;
pub mod truncate;

pub use crate::callsign::{callsign_choices, CallsignChoices, CallsignOptions};
pub use crate::codec::{lookup, resolve, Codec, CodecRegistry};
pub use crate::dot_atom::is_valid_dot_atom;
pub use crate::error::{Error, Result};
pub use crate::soft_break::{soft_break, soft_break_with, soft_hyphenate};
pub use crate::tokens::tokens_from_name;
pub use crate::truncate::{truncate, truncate_chars, DEFAULT_ELLIPSIS};
