//! Command-line interface for the dronefleet delivery planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod assign;
mod error;
mod report;

pub use error::CliError;

use assign::{AssignArgs, run_assign};

pub(crate) const ARG_ASSIGN_PROBLEM: &str = "problem";
pub(crate) const ARG_ASSIGN_OUTPUT: &str = "output";
pub(crate) const ARG_ASSIGN_ROUTES: &str = "routes";
pub(crate) const ENV_ASSIGN_PROBLEM: &str = "DRONEFLEET_CMDS_ASSIGN_PROBLEM";
pub(crate) const DEFAULT_OUTPUT: &str = "output.json";

/// Run the dronefleet CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration layering,
/// problem loading, or writing the results fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Assign(args) => run_assign(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dronefleet",
    about = "Assign delivery orders to a drone fleet and plan grid routes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assign the orders in a problem file to its fleet.
    Assign(AssignArgs),
}

#[cfg(test)]
mod tests;
