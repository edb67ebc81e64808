use std::io::{stdin, stdout, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use quotes_cli::cli_args::Args;
use quotes_cli::session::Session;
use quotes_core::config;
use quotes_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();
    let config = config::load_config(&args.config_path)?;

    let stdout = stdout();
    let color = !args.no_color && stdout.is_terminal();
    debug!("Color output: {color}");

    let mut session = Session::new(config, stdin().lock(), stdout.lock(), color)?;
    session.run()
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
