//! Command-line argument parsing.
//!
//! This module defines the command-line interface of the `quotes` binary
//! using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the quotes app.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use quotes_cli::cli_args::Args;
///
/// let args = Args::parse_from(["quotes", "--no-color"]);
/// assert!(args.no_color);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the config YAML with action aliases and messages.
    ///
    /// If not provided, defaults to `~/.quotes/config.yml` when that file exists.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Disable colored output.
    ///
    /// Output is also left uncolored when stdout is not a terminal.
    #[arg(long, short = 'n', action)]
    pub no_color: bool,
}
