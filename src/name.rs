//! Package name validation and module name derivation.

use std::fmt;

use crate::error::{Error, Result};

/// A validated package name.
///
/// Used verbatim as the project directory name and as the bundle
/// identifier suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validates `name`.
    ///
    /// A name is valid when it is non-empty and, once every `-` and `_`
    /// is stripped, what remains is a non-empty run of ASCII letters and
    /// digits.
    ///
    /// # Errors
    /// * `Error::InvalidName` otherwise
    pub fn parse<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if is_valid_name(&name) {
            Ok(Self(name))
        } else {
            Err(Error::InvalidName { name })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the module name by replacing every `-` with `_`.
    pub fn module_name(&self) -> ModuleName {
        ModuleName(self.0.replace('-', "_"))
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier form of a [`ProjectName`], used for the source directory and
/// inside the Swift templates.
///
/// Not re-validated: a name such as `1app` passes the package name check
/// and yields a module name Swift would reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut stripped = name.chars().filter(|c| *c != '-' && *c != '_').peekable();
    stripped.peek().is_some() && stripped.all(|c| c.is_ascii_alphanumeric())
}
