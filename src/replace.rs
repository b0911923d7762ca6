//! Replacement tables for accented characters.
//!
//! A table maps 4-hex-digit, zero-padded, uppercase code-point keys to
//! GSM-7-friendly substitutes (`"00E9"` → `"e"`). The hosting
//! application supplies it at runtime as a JSON or TOML file; an empty
//! table is legal and simply disables suggestions. Values that match
//! no character of any message are inert.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::alphabet::hex_key;

static KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{4}$").expect("static pattern compiles"));

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read replacement table: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON replacement table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML replacement table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid replacement key {key:?}: expected four hex digits")]
    InvalidKey { key: String },

    #[error("unsupported replacement table extension {extension:?} (expected .json or .toml)")]
    UnsupportedFormat { extension: String },
}

/// An immutable, validated character-substitution table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: HashMap<String, String>,
}

impl ReplacementTable {
    /// An empty table: no character is ever flagged as replaceable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw key/value pairs.
    ///
    /// Keys must be exactly four hex digits; any case is accepted and
    /// normalized to the canonical uppercase form.
    pub fn from_map(entries: HashMap<String, String>) -> Result<Self, TableError> {
        let mut normalized = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            if !KEY_PATTERN.is_match(&key) {
                return Err(TableError::InvalidKey { key });
            }
            normalized.insert(key.to_ascii_uppercase(), value);
        }
        Ok(Self { entries: normalized })
    }

    pub fn from_json_str(content: &str) -> Result<Self, TableError> {
        let raw: HashMap<String, String> = serde_json::from_str(content)?;
        Self::from_map(raw)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TableError> {
        let raw: HashMap<String, String> = toml::from_str(content)?;
        Self::from_map(raw)
    }

    /// Load a table from a `.json` or `.toml` file, dispatching on the
    /// extension.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let ext =
            path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        let content = std::fs::read_to_string(path)?;

        let table = match ext.as_str() {
            "json" => Self::from_json_str(&content)?,
            "toml" => Self::from_toml_str(&content)?,
            other => {
                return Err(TableError::UnsupportedFormat { extension: other.to_string() })
            }
        };

        tracing::debug!(path = %path.display(), entries = table.len(), "loaded replacement table");
        Ok(table)
    }

    /// The substitute for `ch`, if the table has one. Substitutes may
    /// be longer than one character.
    pub fn lookup(&self, ch: char) -> Option<&str> {
        self.entries.get(&hex_key(ch)).map(String::as_str)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&hex_key(ch))
    }

    /// Rewrite `text`, replacing every character that has a substitute
    /// and passing everything else through untouched.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.lookup(ch) {
                Some(substitute) => out.push_str(substitute),
                None => out.push(ch),
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
