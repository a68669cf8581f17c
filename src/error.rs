//! Error handling for xtool.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::process::ExitCode;
use thiserror::Error;

/// Errors that can occur while scaffolding a project or renaming clients.
#[derive(Error, Debug)]
pub enum Error {
    /// The package name is empty or contains characters other than
    /// letters, digits, `-` and `_`.
    #[error("Package name '{name}' is invalid.")]
    InvalidName { name: String },

    /// Something already exists where the project directory would go.
    #[error("Cannot create {name}: a file already exists at that path.")]
    PathCollision { name: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while rendering a project template
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// The interactive name prompt could not be completed
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The identifier pattern given to the renamer did not compile
    #[error("Pattern error: {0}.")]
    PatternError(#[from] regex::Error),
}

impl Error {
    /// Whether the error comes from user input and should be reported
    /// as a plain message rather than treated as a failure of the tool.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::InvalidName { .. } | Error::PathCollision { .. })
    }
}

/// Exit status of a command that did what was asked.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status of a command that rejected its input.
pub const EXIT_FAILURE: u8 = 1;

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler: prints the error to stderr and yields a failing exit code.
pub fn default_error_handler(err: Error) -> ExitCode {
    eprintln!("{}", err);
    ExitCode::FAILURE
}
