//! Interactive input for the package name.
//! Only consulted when `xtool new` is run without a name.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use log::debug;

use crate::error::{Error, Result};

/// Source of answers the scaffolder cannot get from the command line.
pub trait Prompter {
    /// Asks for the package name. May return an empty string.
    fn package_name(&self) -> Result<String>;
}

/// Prompts on the terminal with dialoguer, or reads a single line when
/// stdin is not a terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn package_name(&self) -> Result<String> {
        if io::stdin().is_terminal() {
            return Input::<String>::new()
                .with_prompt("Package name")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| Error::PromptError(e.to_string()));
        }

        debug!("stdin is not a terminal, reading package name from it");
        print!("Package name: ");
        io::stdout().flush()?;
        read_line(io::stdin().lock())
    }
}

/// Reads one line, dropping the line terminator.
///
/// # Errors
/// * `Error::PromptError` when the input ends before a line is read
pub fn read_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::PromptError("unexpected end of input".to_string()));
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    Ok(trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string())
}
