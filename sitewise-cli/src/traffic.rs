//! Traffic command implementation for the Sitewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitewise_scorer::{TrafficPeriod, traffic_series};

use crate::location::load_location;
use crate::output::write_json;
use crate::score::seeded;
use crate::{ARG_LOCATION, ARG_PERIOD, ARG_SEED, CliError, ENV_TRAFFIC_LOCATION};

/// CLI arguments for the `traffic` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "traffic",
    long_about = "Estimate a footfall series for a location. Daily series \
                 have one sample per hour, weekly series one per weekday and \
                 monthly series one per calendar month.",
    about = "Estimate a traffic series for a location"
)]
#[ortho_config(prefix = "SITEWISE")]
pub(crate) struct TrafficArgs {
    /// Path to a JSON file containing a LocationProfile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) location_path: Option<Utf8PathBuf>,
    /// Series granularity: daily, weekly or monthly (default daily).
    #[arg(long = ARG_PERIOD, value_name = "period")]
    #[serde(default)]
    pub(crate) period: Option<String>,
    /// Seed for the noise generator; entropy when absent.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl TrafficArgs {
    pub(crate) fn into_config(self) -> Result<TrafficConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TrafficConfig::try_from(merged)
    }
}

/// Resolved settings for one `traffic` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrafficConfig {
    pub(crate) location_path: Utf8PathBuf,
    pub(crate) period: TrafficPeriod,
    pub(crate) seed: Option<u64>,
}

impl TryFrom<TrafficArgs> for TrafficConfig {
    type Error = CliError;

    fn try_from(args: TrafficArgs) -> Result<Self, Self::Error> {
        let location_path = args.location_path.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_TRAFFIC_LOCATION,
        })?;
        let period = args
            .period
            .as_deref()
            .map_or_else(|| Ok(TrafficPeriod::default()), str::parse::<TrafficPeriod>)?;
        Ok(Self {
            location_path,
            period,
            seed: args.seed,
        })
    }
}

pub(crate) fn run_traffic(args: TrafficArgs) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_traffic_with(args, &mut handle)
}

pub(crate) fn run_traffic_with(args: TrafficArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_traffic(&config, writer)
}

pub(crate) fn execute_traffic(
    config: &TrafficConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let location = load_location(&config.location_path, ARG_LOCATION)?;
    let mut random = seeded(config.seed);
    let series = traffic_series(&location, config.period, &mut random).map_err(|source| {
        CliError::InvalidLocation {
            path: config.location_path.clone(),
            source,
        }
    })?;
    write_json(&series, writer)
}
