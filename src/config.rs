//! Layered configuration.
//!
//! `defaults/textnorm.default.toml` is embedded into the crate so documentation and
//! runtime behavior stay in sync. Callers layer their own files and overrides on top
//! via [`Loader`] before deserializing into [`TextnormConfig`].
//!
//! The text utilities never read configuration themselves; the structs here only
//! build the inputs they take (a [`CallsignOptions`], a [`CodecRegistry`], an
//! ellipsis string).

use crate::callsign::CallsignOptions;
use crate::codec::CodecRegistry;
use crate::error::{Error, Result};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/textnorm.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextnormConfig {
    pub callsign: CallsignConfig,
    pub truncate: TruncateConfig,
    pub codec: CodecConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallsignConfig {
    pub disallowed: Vec<String>,
    pub max_prefix_len: usize,
}

impl CallsignConfig {
    pub fn options(&self) -> Result<CallsignOptions> {
        Ok(CallsignOptions::new()
            .with_max_prefix_len(self.max_prefix_len)?
            .disallow(&self.disallowed))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TruncateConfig {
    pub ellipsis: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    pub default: String,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl CodecConfig {
    /// The fallback codec name, or `None` when fallback is disabled.
    pub fn default_codec(&self) -> Option<&str> {
        Some(self.default.as_str()).filter(|name| !name.trim().is_empty())
    }

    /// Built-in codec table plus the configured aliases.
    pub fn registry(&self) -> Result<CodecRegistry> {
        CodecRegistry::with_aliases(&self.aliases)
    }
}

/// File name looked up inside the user configuration directory.
pub const USER_CONFIG_FILE: &str = "textnorm.toml";

/// `textnorm.toml` under `$XDG_CONFIG_HOME/textnorm/`, or `~/.config/textnorm/` when
/// the variable is unset. `%APPDATA%\textnorm\` on Windows.
pub fn user_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join("textnorm").join(USER_CONFIG_FILE))
}

/// Layers sources over the embedded defaults, lowest precedence first.
///
/// The CLI stacks: defaults, the user file (if present), `--config`, then `--set`.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file, skipping it silently when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Layer [`user_config_path`] when the platform has one.
    pub fn with_user_config(self) -> Self {
        match user_config_path() {
            Some(path) => self.with_optional_file(path),
            None => self,
        }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        debug!(path = %path.display(), required, "layering config file");
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `("truncate.ellipsis", "~")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply a `key=value` assignment as given on the command line.
    ///
    /// Integers and `true`/`false` keep their type; anything else is a string.
    pub fn set_assignment(self, assignment: &str) -> Result<Self> {
        let (key, raw) = assignment
            .split_once('=')
            .map(|(key, raw)| (key.trim(), raw))
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| Error::InvalidOverride(assignment.to_string()))?;
        debug!(key, value = raw, "applying override");

        if let Ok(int) = raw.parse::<i64>() {
            self.set_override(key, int)
        } else if let Ok(flag) = raw.parse::<bool>() {
            self.set_override(key, flag)
        } else {
            self.set_override(key, raw)
        }
    }

    pub fn build(self) -> Result<TextnormConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<TextnormConfig> {
    Loader::new().build()
}
