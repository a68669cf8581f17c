//! Renaming of generated API client symbols.
//!
//! Generated Swift sources declare a type called `Client`, which clashes
//! with other client types. Only standalone occurrences are replaced:
//! `Client` inside `ClientFactory` or `MyClient` is left alone.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::error::Result;

/// Identifier rewritten by default.
pub const CLIENT_IDENTIFIER: &str = "Client";
/// Replacement for [`CLIENT_IDENTIFIER`].
pub const CLIENT_REPLACEMENT: &str = "DeveloperAPIClient";

/// Replaces whole-word, case-sensitive occurrences of one identifier.
#[derive(Debug, Clone)]
pub struct Renamer {
    pattern: Regex,
    replacement: String,
}

impl Renamer {
    /// # Errors
    /// * `Error::PatternError` if the word-boundary pattern fails to compile
    pub fn new(identifier: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(identifier)))?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Renamer for `Client` -> `DeveloperAPIClient`.
    pub fn client() -> Result<Self> {
        Self::new(CLIENT_IDENTIFIER, CLIENT_REPLACEMENT)
    }

    /// Returns `text` with every standalone occurrence replaced.
    /// Borrows the input when nothing matched.
    pub fn rename<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, regex::NoExpand(self.replacement.as_str()))
    }

    /// Rewrites `path` in place.
    ///
    /// Line endings are read as universal newlines: `\r\n` and lone `\r`
    /// become `\n`, so a rewritten file always has LF endings. A file whose
    /// only difference would be its line endings is left alone.
    ///
    /// # Returns
    /// * `Ok(true)` if the file changed and was written
    /// * `Ok(false)` if nothing matched; the file is not touched
    pub fn rewrite_file<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let path = path.as_ref();
        let original = normalize_newlines(&fs::read_to_string(path)?);
        match self.rename(&original) {
            Cow::Owned(updated) if updated != original => {
                debug!("Rewriting {}", path.display());
                fs::write(path, updated)?;
                Ok(true)
            }
            _ => {
                debug!("Nothing to rename in {}", path.display());
                Ok(false)
            }
        }
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
