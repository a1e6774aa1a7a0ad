//! Score command implementation for the Sitewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::{Datelike, Utc};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitewise_core::SeededRandom;
use sitewise_scorer::{
    score_business_recommendations, score_business_recommendations_with_local_businesses,
};

use crate::location::load_location;
use crate::output::write_json;
use crate::{
    ARG_LOCAL_BUSINESSES, ARG_LOCATION, ARG_REFERENCE_YEAR, ARG_SEED, CliError, ENV_SCORE_LOCATION,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Rank the five business archetypes for a location by \
                 priority. The location is a JSON-encoded LocationProfile. \
                 Nearby businesses are synthesised only when requested and \
                 are reproducible when a seed is given.",
    about = "Rank business archetypes for a location"
)]
#[ortho_config(prefix = "SITEWISE")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing a LocationProfile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) location_path: Option<Utf8PathBuf>,
    /// Attach synthesised nearby businesses to each recommendation.
    #[arg(
        long = ARG_LOCAL_BUSINESSES,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) local_businesses: Option<bool>,
    /// Seed for the nearby-business generator; entropy when absent.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Year used to back-date "operating since"; the current year when absent.
    #[arg(long = ARG_REFERENCE_YEAR, value_name = "year")]
    #[serde(default)]
    pub(crate) reference_year: Option<i32>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved settings for one `score` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) location_path: Utf8PathBuf,
    pub(crate) local_businesses: bool,
    pub(crate) seed: Option<u64>,
    pub(crate) reference_year: i32,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let location_path = args.location_path.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_SCORE_LOCATION,
        })?;
        Ok(Self {
            location_path,
            local_businesses: args.local_businesses.unwrap_or(false),
            seed: args.seed,
            reference_year: args.reference_year.unwrap_or_else(|| Utc::now().year()),
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_score_with(args, &mut handle)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_score(&config, writer)
}

pub(crate) fn execute_score(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let location = load_location(&config.location_path, ARG_LOCATION)?;
    let ranked = if config.local_businesses {
        let mut random = seeded(config.seed);
        score_business_recommendations_with_local_businesses(
            &location,
            config.reference_year,
            &mut random,
        )
    } else {
        score_business_recommendations(&location)
    }
    .map_err(|source| CliError::InvalidLocation {
        path: config.location_path.clone(),
        source,
    })?;
    write_json(&ranked, writer)
}

/// Random source for cosmetic output: reproducible with a seed, entropy otherwise.
pub(crate) fn seeded(seed: Option<u64>) -> SeededRandom {
    seed.map_or_else(SeededRandom::from_entropy, SeededRandom::from_seed)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
