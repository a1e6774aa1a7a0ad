//! Command-line front end for the Sitewise scoring engine.
//!
//! Every subcommand reads a `LocationProfile` JSON document, validates it and
//! prints the requested analysis as pretty JSON on stdout. Options layer
//! through `ortho_config`: CLI flags override `SITEWISE_*` environment
//! variables, which override configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod franchise;
mod fs;
mod idea;
mod location;
mod logging;
mod market;
mod output;
mod score;
mod traffic;

pub use error::CliError;

use franchise::{FranchiseArgs, run_franchise};
use idea::{IdeaArgs, run_idea};
use market::{MarketArgs, run_market};
use score::{ScoreArgs, run_score};
use traffic::{TrafficArgs, run_traffic};

pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_LOCAL_BUSINESSES: &str = "local-businesses";
pub(crate) const ARG_REFERENCE_YEAR: &str = "reference-year";
pub(crate) const ARG_PERIOD: &str = "period";
pub(crate) const ARG_KIND: &str = "kind";
pub(crate) const ARG_LOG_LEVEL: &str = "log-level";

pub(crate) const ENV_SCORE_LOCATION: &str = "SITEWISE_CMDS_SCORE_LOCATION_PATH";
pub(crate) const ENV_FRANCHISE_LOCATION: &str = "SITEWISE_CMDS_FRANCHISE_LOCATION_PATH";
pub(crate) const ENV_TRAFFIC_LOCATION: &str = "SITEWISE_CMDS_TRAFFIC_LOCATION_PATH";
pub(crate) const ENV_IDEA_LOCATION: &str = "SITEWISE_CMDS_IDEA_LOCATION_PATH";
pub(crate) const ENV_IDEA_KIND: &str = "SITEWISE_CMDS_IDEA_KIND";
pub(crate) const ENV_MARKET_LOCATION: &str = "SITEWISE_CMDS_MARKET_LOCATION_PATH";
pub(crate) const ENV_LOG_LEVEL: &str = "SITEWISE_LOG_LEVEL";

/// Run the Sitewise CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration layering,
/// input loading or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.log_level.as_deref())?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Franchise(args) => run_franchise(args),
        Command::Traffic(args) => run_traffic(args),
        Command::Idea(args) => run_idea(args),
        Command::Market(args) => run_market(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sitewise",
    about = "Score locations for small-business and franchise viability",
    version
)]
struct Cli {
    /// Log filter directive used when `RUST_LOG` is unset (e.g. "debug").
    #[arg(long = ARG_LOG_LEVEL, value_name = "filter", env = ENV_LOG_LEVEL, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the business archetypes for a location.
    Score(ScoreArgs),
    /// Rank the franchise brands for a location.
    Franchise(FranchiseArgs),
    /// Estimate a traffic series for a location.
    Traffic(TrafficArgs),
    /// Analyse one business idea at a location.
    Idea(IdeaArgs),
    /// Summarise the demand and market risk of a location.
    Market(MarketArgs),
}

#[cfg(test)]
mod tests;
