//! xtool's entry point.
//! Parses arguments, sets up logging and dispatches to the subcommands.

use std::io;
use std::process::ExitCode;

use xtool_demo::{
    cli::{get_args, Args, Command},
    commands,
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    scaffold::Scaffolder,
};

fn main() -> ExitCode {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => default_error_handler(err),
    }
}

/// Dispatches to the requested subcommand.
///
/// `--version` wins over everything; `--help` and no subcommand at all
/// print the overview.
fn run(args: Args) -> Result<u8> {
    let mut out = io::stdout().lock();

    if args.version {
        return commands::version(&mut out);
    }

    let cwd = std::env::current_dir()?;
    match args.command {
        None | Some(Command::Help { .. }) => commands::help(&mut out),
        Some(Command::New { name, .. }) => {
            let engine = MiniJinjaRenderer::new();
            let prompt = DialoguerPrompter::new();
            Scaffolder::new(cwd, &engine).scaffold(name, &prompt, &mut out)
        }
        Some(Command::Dev { .. }) => commands::dev(&cwd, &mut out),
        Some(Command::Devices { .. }) => commands::devices(&mut out),
        Some(Command::Unknown(argv)) => {
            let command = argv.first().map(String::as_str).unwrap_or_default();
            commands::unknown(command, &mut out)
        }
    }
}
