//! # simple-poker CLI Library
//!
//! Terminal front end for the four-card showdown engine. The [`run`] function
//! parses command-line arguments and executes the matching subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against the computer with timed card reveals
//! - `deal`: Deal and resolve one round (text or JSON record)
//! - `eval`: Evaluate a four-card hand
//! - `cfg`: Display the effective configuration

use clap::Parser;
use std::io::Write;
use std::time::Duration;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod table;
pub mod timer;
pub mod ui;

use cli::{Commands, SimplePokerCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`].
///
/// # Example
///
/// ```no_run
/// use std::io;
/// let args = vec!["simple-poker", "deal", "--seed", "42"];
/// let code = simple_poker_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SimplePokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = config::load_with_sources()
        .map_err(CliError::from)
        .and_then(|resolved| dispatch(cli.cmd, &resolved, out));

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    resolved: &config::ConfigResolved,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Play {
            rounds,
            seed,
            reveal_ms,
        } => {
            let seed = seed.or(resolved.config.seed);
            let delay =
                Duration::from_millis(reveal_ms.unwrap_or(resolved.config.reveal_delay_ms));
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(rounds, seed, delay, out, &mut stdin_lock)
        }
        Commands::Deal { seed, json } => {
            handle_deal_command(seed.or(resolved.config.seed), json, out)
        }
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(resolved, out),
    }
}
