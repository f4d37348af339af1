//! # holdem CLI Library
//!
//! Command-line front end for the Hold'em engine and its policy bots.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out: Vec<u8> = Vec::new();
//! let mut err: Vec<u8> = Vec::new();
//! let code = holdem_cli::run(["holdem", "eval", "As Ks Qs Js 10s"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("Royal Flush (1000)"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a single hand for inspection
//! - `eval`: Score five cards, or hole cards plus a board
//! - `sim`: Play bot-only hands and record them as JSONL
//! - `cfg`: Display the resolved configuration and its sources

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_deal_command, handle_eval_command, handle_sim_command};
use config::Overrides;
pub use error::CliError;

/// Parses `args` and runs the selected command.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or
/// [`exit_code::ERROR`]. Help and version output go to `out`; parse errors
/// and command failures go to `err`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    let _ = writeln!(err, "Usage: holdem <command> [options]\n\nCommands:");
                    for c in COMMANDS {
                        let _ = writeln!(err, "  {}", c);
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Deal { table } => config::load_with_sources(&table.overrides())
            .map_err(CliError::from)
            .and_then(|resolved| handle_deal_command(&resolved.config, out)),
        Commands::Eval { cards, board, json } => {
            handle_eval_command(&cards, board.as_deref(), json, out)
        }
        Commands::Sim {
            table,
            hands,
            difficulty,
            output,
        } => {
            let overrides = Overrides {
                hands,
                difficulty,
                ..table.overrides()
            };
            config::load_with_sources(&overrides)
                .map_err(CliError::from)
                .and_then(|resolved| {
                    handle_sim_command(&resolved.config, output.as_deref(), out)
                })
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
