//! Franchise command implementation for the Sitewise CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitewise_scorer::score_franchise_recommendations;

use crate::location::load_location;
use crate::output::write_json;
use crate::{ARG_LOCATION, CliError, ENV_FRANCHISE_LOCATION};

/// CLI arguments for the `franchise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "franchise", about = "Rank franchise brands for a location")]
#[ortho_config(prefix = "SITEWISE")]
pub(crate) struct FranchiseArgs {
    /// Path to a JSON file containing a LocationProfile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) location_path: Option<Utf8PathBuf>,
}

impl FranchiseArgs {
    fn into_location_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.location_path.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_FRANCHISE_LOCATION,
        })
    }
}

pub(crate) fn run_franchise(args: FranchiseArgs) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_franchise_with(args, &mut handle)
}

pub(crate) fn run_franchise_with(
    args: FranchiseArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let path = args.into_location_path()?;
    execute_franchise(&path, writer)
}

pub(crate) fn execute_franchise(path: &Utf8Path, writer: &mut dyn Write) -> Result<(), CliError> {
    let location = load_location(path, ARG_LOCATION)?;
    let ranked =
        score_franchise_recommendations(&location).map_err(|source| CliError::InvalidLocation {
            path: path.to_path_buf(),
            source,
        })?;
    write_json(&ranked, writer)
}
