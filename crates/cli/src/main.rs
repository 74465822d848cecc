use std::io::{stdout, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use argscan_cli::check::{self, Outcome};
use argscan_cli::cli_args::Args;
use argscan_cli::report;
use argscan_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Checking {} arguments", args.arguments.len());

    match check::run(&args)? {
        Outcome::HelpRequested => println!("help requested"),
        Outcome::Report(resolved) => {
            println!("{}", report::render(&resolved, stdout().is_terminal()));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
