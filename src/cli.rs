//! Command-line interface implementation for xtool and rename-client.
//! Provides argument parsing using clap.

use clap::{error::ErrorKind, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for xtool.
///
/// Help and version are handled by the commands themselves so that their
/// output matches xtool's own text rather than clap's.
#[derive(Parser, Debug)]
#[command(
    name = "xtool",
    about = "xtool demonstration",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Args {
    /// Show help information; ignored when a subcommand is given
    #[arg(short, long, global = true)]
    pub help: bool,

    /// Show the xtool version; wins over any subcommand
    #[arg(long, global = true)]
    pub version: bool,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a new xtool SwiftPM project
    #[command(disable_help_flag = true)]
    New {
        /// Package name; prompted for when omitted
        #[arg(value_name = "NAME")]
        name: Option<String>,

        #[arg(hide = true)]
        rest: Vec<String>,
    },
    /// Build and run an xtool SwiftPM project
    #[command(disable_help_flag = true)]
    Dev {
        #[arg(hide = true)]
        rest: Vec<String>,
    },
    /// List devices
    #[command(disable_help_flag = true)]
    Devices {
        #[arg(hide = true)]
        rest: Vec<String>,
    },
    /// Show help information
    #[command(disable_help_flag = true)]
    Help {
        #[arg(hide = true)]
        rest: Vec<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Command-line arguments structure for rename-client.
#[derive(Parser, Debug)]
#[command(
    name = "rename-client",
    about = "Rename generated Swift `Client` symbols to `DeveloperAPIClient`"
)]
pub struct RenameArgs {
    /// Swift files to rewrite in place
    #[arg(value_name = "SWIFT_FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

pub const RENAME_USAGE: &str = "usage: rename-client <swift-file> [<swift-file> ...]";

/// Parses command line arguments for xtool.
///
/// # Exits
/// * With clap's default error handling for malformed arguments
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| e.exit())
}

/// Parses command line arguments for rename-client.
///
/// # Exits
/// * With status code 1 and a usage line on stderr if no file is given
/// * With clap's default error handling for other argument errors
pub fn get_rename_args() -> RenameArgs {
    match RenameArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("{}", RENAME_USAGE);
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
