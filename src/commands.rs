//! Canned output for the subcommands that only demonstrate xtool.

use std::io::Write;
use std::path::Path;

use crate::error::{Result, EXIT_FAILURE, EXIT_SUCCESS};

pub const VERSION: &str = "xtool 1.2.0";

const HELP: &str = "OVERVIEW: Cross-platform Xcode replacement

USAGE: xtool <subcommand>

OPTIONS:
  -h, --help              Show help information.

CONFIGURATION SUBCOMMANDS:
  setup                   Set up xtool for iOS development
  auth                    Manage Apple Developer Services authentication
  sdk                     Manage the Darwin Swift SDK

DEVELOPMENT SUBCOMMANDS:
  new                     Create a new xtool SwiftPM project
  dev                     Build and run an xtool SwiftPM project
  ds                      Interact with Apple Developer Services

DEVICE SUBCOMMANDS:
  devices                 List devices
  install                 Install an ipa file to your device
  uninstall               Uninstall an installed app
  launch                  Launch an installed app

  See 'xtool help <subcommand>' for detailed help.";

const BUILD_LOG: [&str; 11] = [
    "Planning...",
    "Building for debugging...",
    "[1/8] Compiling ContentView",
    "[2/8] Compiling App",
    "[3/8] Compiling Sources",
    "[4/8] Linking",
    "[5/8] Processing Info.plist",
    "[6/8] Generating bundle",
    "[7/8] Code signing",
    "[8/8] Linking Hello-App",
    "Build of product 'Hello-App' complete! (3s)",
];

const DEV_NOTE: [&str; 6] = [
    "\nNote: This is a demonstration. In a real environment, xtool would:",
    "- Build the Swift package for iOS",
    "- Generate an .app bundle",
    "- Sign the app",
    "- Install to connected iOS device",
    "- Launch the app",
];

pub fn help<W: Write>(out: &mut W) -> Result<u8> {
    writeln!(out, "{}", HELP)?;
    Ok(EXIT_SUCCESS)
}

pub fn version<W: Write>(out: &mut W) -> Result<u8> {
    writeln!(out, "{}", VERSION)?;
    Ok(EXIT_SUCCESS)
}

/// Pretends to build the project in `project_dir`.
///
/// Fails unless both `Package.swift` and `xtool.yml` are present.
pub fn dev<W: Write>(project_dir: &Path, out: &mut W) -> Result<u8> {
    if !project_dir.join("Package.swift").exists() || !project_dir.join("xtool.yml").exists() {
        writeln!(
            out,
            "Error: Not in an xtool project directory. Run 'xtool new' to create a project."
        )?;
        return Ok(EXIT_FAILURE);
    }

    for line in BUILD_LOG.iter().chain(DEV_NOTE.iter()) {
        writeln!(out, "{}", line)?;
    }
    Ok(EXIT_SUCCESS)
}

pub fn devices<W: Write>(out: &mut W) -> Result<u8> {
    writeln!(out, "Available devices:")?;
    writeln!(out, "📱 No devices connected")?;
    writeln!(out)?;
    writeln!(out, "Note: Connect an iOS device via USB to see it listed here.")?;
    writeln!(out, "xtool can install and launch apps on connected devices.")?;
    Ok(EXIT_SUCCESS)
}

pub fn unknown<W: Write>(command: &str, out: &mut W) -> Result<u8> {
    writeln!(out, "Unknown command: {}", command)?;
    writeln!(out, "Run 'xtool help' for available commands.")?;
    Ok(EXIT_FAILURE)
}
