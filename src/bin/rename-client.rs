//! Rewrites generated Swift sources in place, renaming the standalone
//! `Client` identifier to `DeveloperAPIClient`.

use std::process::ExitCode;

use anyhow::Context;
use xtool_demo::{cli::get_rename_args, logger::init_logger, rename::Renamer};

fn main() -> ExitCode {
    let args = get_rename_args();
    init_logger(args.verbose);

    if let Err(err) = run(&args.files) {
        eprintln!("{:#}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(files: &[std::path::PathBuf]) -> anyhow::Result<()> {
    let renamer = Renamer::client()?;
    for file in files {
        let changed = renamer
            .rewrite_file(file)
            .with_context(|| format!("failed to rewrite {}", file.display()))?;
        log::info!("{}: {}", file.display(), if changed { "renamed" } else { "unchanged" });
    }
    Ok(())
}
