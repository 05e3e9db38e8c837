//! Error type for the fallible corners of the crate.
//!
//! The text utilities themselves never fail; only configuration loading and
//! registry construction can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("codec alias '{alias}' points at '{target}', which is not a known text codec")]
    UnknownCodec { alias: String, target: String },

    #[error("callsign prefix length must be at least 2, got {0}")]
    InvalidPrefixLength(usize),

    #[error("override '{0}' is not of the form key=value")]
    InvalidOverride(String),
}
