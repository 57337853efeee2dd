use std::process::ExitCode;

use clap::Parser;
use tokensmith_cli::{init_logging, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Theme generation failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
