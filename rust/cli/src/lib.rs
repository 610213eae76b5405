//! # holdem CLI
//!
//! Command-line interface for the hold'em hand simulator.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand, writing
//! to the injected output streams.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "deal", "--seed", "42"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: interactive hands, one human seat against AI opponents
//! - `sim`: strategy-family matchups over many hands, with a win tally
//! - `deal`: deal a single board for inspection
//!
//! Exit codes: 0 on success, 2 on any error.

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;

pub mod cli;
mod commands;
mod error;
pub mod formatters;
pub mod human;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{handle_deal_command, handle_play_command, handle_sim_command};
pub use error::CliError;

/// Parse arguments and dispatch to the subcommand handlers.
///
/// Returns the process exit code: 0 for success (including `--help` and
/// `--version`), 2 for argument, input, or engine errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let cli = match HoldemCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(out, "{}", e);
            return 0;
        }
        Err(e) => {
            let _ = write!(err, "{}", e);
            return 2;
        }
    };

    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seats,
            hands,
            seed,
            chips,
        } => handle_play_command(seats, hands, seed, chips, out, err),
        Commands::Sim {
            matchup,
            hands,
            seed,
        } => handle_sim_command(matchup, hands, seed, out, err),
        Commands::Deal { seed, seats, json } => handle_deal_command(seed, seats, json, out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}

/// Engine progress lines go through `tracing`; `-v` raises the filter to
/// info, `-vv` to debug. `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "holdem_engine=info,holdem=info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    // repeated run() calls (tests) must not panic on double-init
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
