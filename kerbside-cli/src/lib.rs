//! Command-line interface for the Kerbside pickup route engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod optimize;

pub use error::CliError;

use optimize::OptimizeArgs;

pub(crate) const ARG_OPTIMIZE_REQUEST: &str = "request";
pub(crate) const ARG_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_OSRM_PROFILE: &str = "osrm-profile";
pub(crate) const ARG_ELEVATION_BASE_URL: &str = "elevation-base-url";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_ROLLING_WEIGHT: &str = "rolling-weight";
pub(crate) const ARG_ELEVATION_WEIGHT: &str = "elevation-weight";
pub(crate) const ARG_IDLE_WEIGHT: &str = "idle-weight";
pub(crate) const ENV_OPTIMIZE_REQUEST: &str = "KERBSIDE_CMDS_OPTIMIZE_REQUEST_PATH";

/// Run the Kerbside CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration, request
/// loading, optimisation or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimize(args) => optimize::run_optimize(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "kerbside",
    about = "Sequence recycling pickups into an energy-aware route",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimise the visiting order of a JSON route request.
    Optimize(OptimizeArgs),
}

#[cfg(test)]
mod tests;
