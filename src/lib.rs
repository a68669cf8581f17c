//! xtool-demo scaffolds xtool SwiftPM projects and prints canned output
//! for the rest of the xtool command surface. It also ships the
//! `rename-client` utility used when regenerating API clients.

/// Command-line interfaces of both binaries
pub mod cli;

/// Static help, version, dev and devices output
pub mod commands;

/// Error types and handling
pub mod error;

/// `env_logger` setup
pub mod logger;

/// Package and module names
pub mod name;

/// Interactive package name input
pub mod prompt;

/// Standalone identifier renaming in generated sources
pub mod rename;

/// MiniJinja rendering of paths and file contents
pub mod renderer;

/// Project directory creation
/// Creates:
/// - `<name>/Sources/<module>/`
/// - `<name>/.sourcekit-lsp/`
pub mod scaffold;

/// The six generated project files
pub mod template;
