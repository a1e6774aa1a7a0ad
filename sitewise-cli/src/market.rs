//! Market command implementation for the Sitewise CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitewise_scorer::market_overview;

use crate::location::load_location;
use crate::output::write_json;
use crate::score::seeded;
use crate::{ARG_LOCATION, ARG_SEED, CliError, ENV_MARKET_LOCATION};

/// CLI arguments for the `market` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "market", about = "Summarise demand and market risk for a location")]
#[ortho_config(prefix = "SITEWISE")]
pub(crate) struct MarketArgs {
    /// Path to a JSON file containing a LocationProfile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) location_path: Option<Utf8PathBuf>,
    /// Seed for the segment and confidence draws; entropy when absent.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_market(args: MarketArgs) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_market_with(args, &mut handle)
}

pub(crate) fn run_market_with(args: MarketArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let path = merged.location_path.ok_or(CliError::MissingArgument {
        field: ARG_LOCATION,
        env: ENV_MARKET_LOCATION,
    })?;
    execute_market(&path, merged.seed, writer)
}

pub(crate) fn execute_market(
    path: &Utf8Path,
    seed: Option<u64>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let location = load_location(path, ARG_LOCATION)?;
    let mut random = seeded(seed);
    let overview =
        market_overview(&location, &mut random).map_err(|source| CliError::InvalidLocation {
            path: path.to_path_buf(),
            source,
        })?;
    write_json(&overview, writer)
}
