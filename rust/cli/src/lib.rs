//! # Highcard CLI Library
//!
//! Command-line front end for the high-card duel engine. The primary entry
//! point is [`run`], which parses arguments and dispatches to a subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["highcard", "play", "--seed", "42", "--pace", "0"];
//! let code = highcard_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play an interactive game against the CPU
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::{BufRead, Write};
#[macro_use]
mod macros;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HighcardCli};
use commands::{PlayOptions, handle_cfg_command, handle_play_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "cfg"];

/// Main entry point for the CLI application.
///
/// Reads player input from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_stdin(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], with player input taken from `stdin`.
///
/// ```
/// use std::io::Cursor;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("1\nq\n");
/// let code = highcard_cli::run_with_stdin(
///     ["highcard", "play", "--seed", "7", "--pace", "0", "--hand-size", "3"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Rounds played: 1"));
/// ```
pub fn run_with_stdin<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HighcardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with success
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: highcard <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: highcard --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            seed,
            hand_size,
            pace,
            log,
            rounds,
        } => {
            let opts = PlayOptions {
                seed,
                hand_size: hand_size.map(usize::from),
                pace,
                log,
                rounds,
            };
            handle_play_command(opts, out, err, stdin)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
