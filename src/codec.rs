//! Codec name resolution
//!
//! Maps a user-supplied encoding name such as `"UTF8"` or `"latin-1"` to a canonical
//! text codec descriptor. The alias table is owned by this crate so results do not
//! depend on whichever encodings the host platform happens to support.
//!
//! Some registered codecs are transforms rather than text encodings (`zlib`, `base64`,
//! `rot13`, ...). They are known to the table but never handed out: a request for one
//! behaves exactly like a request for an unknown name and falls through to the default.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Codec used when the caller does not name a default.
pub const DEFAULT_CODEC: &str = "utf-8";

/// A canonical text encoding, compared by canonical name.
///
/// Serializes as its canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Codec {
    name: &'static str,
}

impl Codec {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Text(Codec),
    /// Registered under a codec name but not a faithful text encoding
    Transform(&'static str),
}

// (canonical name, is a text encoding, aliases)
const CODEC_TABLE: &[(&str, bool, &[&str])] = &[
    ("utf-8", true, &["u8", "utf", "utf8_ucs2", "utf8_ucs4", "cp65001"]),
    ("utf-8-sig", true, &[]),
    ("utf-16", true, &["u16"]),
    ("utf-16-le", true, &["unicodelittleunmarked"]),
    ("utf-16-be", true, &["unicodebigunmarked"]),
    ("utf-32", true, &["u32"]),
    ("utf-32-le", true, &[]),
    ("utf-32-be", true, &[]),
    (
        "ascii",
        true,
        &[
            "646",
            "ansi_x3.4_1968",
            "cp367",
            "csascii",
            "ibm367",
            "iso646_us",
            "us",
            "us_ascii",
        ],
    ),
    (
        "iso8859-1",
        true,
        &[
            "latin_1",
            "latin",
            "l1",
            "8859",
            "cp819",
            "iso8859",
            "iso_ir_100",
            "csisolatin1",
        ],
    ),
    ("iso8859-2", true, &["latin2", "l2"]),
    ("iso8859-3", true, &["latin3", "l3"]),
    ("iso8859-4", true, &["latin4", "l4"]),
    ("iso8859-5", true, &["cyrillic"]),
    ("iso8859-6", true, &["arabic"]),
    ("iso8859-7", true, &["greek", "greek8"]),
    ("iso8859-8", true, &["hebrew"]),
    ("iso8859-9", true, &["latin5", "l5"]),
    ("iso8859-10", true, &["latin6", "l6"]),
    ("iso8859-11", true, &["thai"]),
    ("iso8859-13", true, &["latin7", "l7"]),
    ("iso8859-14", true, &["latin8", "l8"]),
    ("iso8859-15", true, &["latin9", "l9"]),
    ("iso8859-16", true, &["latin10", "l10"]),
    ("cp1250", true, &["windows_1250"]),
    ("cp1251", true, &["windows_1251"]),
    ("cp1252", true, &["windows_1252"]),
    ("cp1253", true, &["windows_1253"]),
    ("cp1254", true, &["windows_1254"]),
    ("cp1255", true, &["windows_1255"]),
    ("cp1256", true, &["windows_1256"]),
    ("cp1257", true, &["windows_1257"]),
    ("cp1258", true, &["windows_1258"]),
    ("cp437", true, &["ibm437", "437"]),
    ("cp850", true, &["ibm850", "850"]),
    ("cp866", true, &["ibm866", "866"]),
    ("koi8-r", true, &[]),
    ("koi8-u", true, &[]),
    ("mac-roman", true, &["macintosh"]),
    ("shift_jis", true, &["csshiftjis", "sjis", "s_jis"]),
    ("euc_jp", true, &["ujis", "u_jis"]),
    ("iso2022_jp", true, &["csiso2022jp"]),
    ("euc_kr", true, &["korean", "ksc5601", "ks_c_5601_1987"]),
    ("gb2312", true, &["chinese", "csiso58gb231280", "euc_cn"]),
    ("gbk", true, &["936", "cp936", "ms936"]),
    ("gb18030", true, &["gb18030_2000"]),
    ("big5", true, &["big5_tw", "csbig5"]),
    ("zlib", false, &["zip", "zlib_codec"]),
    ("bz2", false, &["bz2_codec"]),
    ("base64", false, &["base_64", "base64_codec"]),
    ("hex", false, &["hex_codec"]),
    ("quopri", false, &["quoted_printable", "quopri_codec"]),
    ("uu", false, &["uu_codec"]),
    ("rot-13", false, &["rot13"]),
];

static BUILTIN: Lazy<CodecRegistry> = Lazy::new(CodecRegistry::from_table);

/// Reduce an encoding name to its lookup key.
///
/// Case, whitespace and the separators `-`, `_` and `.` are not significant.
/// Returns `None` when nothing is left to look up.
pub fn normalize_name(name: &str) -> Option<String> {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '_' | '.'))
        .flat_map(char::to_lowercase)
        .collect();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Alias table from normalized names to codecs
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    entries: HashMap<String, Entry>,
}

impl CodecRegistry {
    /// The shared built-in table.
    pub fn builtin() -> &'static CodecRegistry {
        &BUILTIN
    }

    fn from_table() -> Self {
        let mut entries = HashMap::new();
        for &(canonical, text, aliases) in CODEC_TABLE {
            let entry = if text {
                Entry::Text(Codec { name: canonical })
            } else {
                Entry::Transform(canonical)
            };
            for name in std::iter::once(&canonical).chain(aliases.iter()) {
                if let Some(key) = normalize_name(name) {
                    entries.insert(key, entry);
                }
            }
        }
        CodecRegistry { entries }
    }

    /// Copy the built-in table and layer extra `alias -> canonical` pairs on top.
    ///
    /// Every target must already resolve to a text codec.
    pub fn with_aliases<I, K, V>(aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut registry = Self::builtin().clone();
        for (alias, target) in aliases {
            let (alias, target) = (alias.as_ref(), target.as_ref());
            let codec = registry.get(target).ok_or_else(|| Error::UnknownCodec {
                alias: alias.to_string(),
                target: target.to_string(),
            })?;
            // An alias that normalizes to nothing can never be looked up
            if let Some(key) = normalize_name(alias) {
                debug!(alias, codec = codec.name(), "registering codec alias");
                registry.entries.insert(key, Entry::Text(codec));
            }
        }
        Ok(registry)
    }

    /// Look up a text codec by name, without any fallback.
    pub fn get(&self, name: &str) -> Option<Codec> {
        let key = normalize_name(name)?;
        match self.entries.get(&key)? {
            Entry::Text(codec) => Some(*codec),
            Entry::Transform(canonical) => {
                trace!(name, canonical, "codec is not a text encoding");
                None
            }
        }
    }

    /// Resolve `name`, falling back to `default` when it is unknown or not a text codec.
    pub fn resolve(&self, name: &str, default: Option<&str>) -> Option<Codec> {
        if let Some(codec) = self.get(name) {
            return Some(codec);
        }
        let default = default?;
        debug!(requested = name, default, "falling back to default codec");
        self.get(default)
    }

    /// [`resolve`](Self::resolve) with [`DEFAULT_CODEC`] as the fallback.
    pub fn lookup(&self, name: &str) -> Option<Codec> {
        self.resolve(name, Some(DEFAULT_CODEC))
    }

    /// All distinct text codecs, sorted by name.
    pub fn codecs(&self) -> Vec<Codec> {
        let mut codecs: Vec<Codec> = self
            .entries
            .values()
            .filter_map(|entry| match entry {
                Entry::Text(codec) => Some(*codec),
                Entry::Transform(_) => None,
            })
            .collect();
        codecs.sort_by_key(|codec| codec.name);
        codecs.dedup();
        codecs
    }

    /// Every name (canonical or alias) registered for `codec`.
    pub fn aliases_of(&self, codec: Codec) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, entry)| **entry == Entry::Text(codec))
            .map(|(key, _)| key.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

/// Resolve against the built-in table. See [`CodecRegistry::resolve`].
pub fn resolve(name: &str, default: Option<&str>) -> Option<Codec> {
    CodecRegistry::builtin().resolve(name, default)
}

/// Resolve against the built-in table with a `utf-8` fallback.
pub fn lookup(name: &str) -> Option<Codec> {
    CodecRegistry::builtin().lookup(name)
}
