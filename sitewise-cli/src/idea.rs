//! Idea command implementation for the Sitewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitewise_core::BusinessKind;
use sitewise_scorer::analyze_business_idea;

use crate::location::load_location;
use crate::output::write_json;
use crate::score::seeded;
use crate::{ARG_KIND, ARG_LOCATION, ARG_SEED, CliError, ENV_IDEA_KIND, ENV_IDEA_LOCATION};

/// CLI arguments for the `idea` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "idea",
    long_about = "Analyse one business idea at a location: success \
                 probability, start-up resources, ROI, risks, market trends, \
                 support programs and the competitive landscape.",
    about = "Analyse a business idea at a location"
)]
#[ortho_config(prefix = "SITEWISE")]
pub(crate) struct IdeaArgs {
    /// Path to a JSON file containing a LocationProfile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) location_path: Option<Utf8PathBuf>,
    /// Business archetype to analyse (cafe, restaurant, retail, gym, coworking).
    #[arg(long = ARG_KIND, value_name = "kind")]
    #[serde(default)]
    pub(crate) kind: Option<String>,
    /// Seed for the program and competitor picks; entropy when absent.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl IdeaArgs {
    pub(crate) fn into_config(self) -> Result<IdeaConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        IdeaConfig::try_from(merged)
    }
}

/// Resolved settings for one `idea` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdeaConfig {
    pub(crate) location_path: Utf8PathBuf,
    pub(crate) kind: BusinessKind,
    pub(crate) seed: Option<u64>,
}

impl TryFrom<IdeaArgs> for IdeaConfig {
    type Error = CliError;

    fn try_from(args: IdeaArgs) -> Result<Self, Self::Error> {
        let location_path = args.location_path.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_IDEA_LOCATION,
        })?;
        let raw_kind = args.kind.ok_or(CliError::MissingArgument {
            field: ARG_KIND,
            env: ENV_IDEA_KIND,
        })?;
        Ok(Self {
            location_path,
            kind: raw_kind.parse()?,
            seed: args.seed,
        })
    }
}

pub(crate) fn run_idea(args: IdeaArgs) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_idea_with(args, &mut handle)
}

pub(crate) fn run_idea_with(args: IdeaArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_idea(&config, writer)
}

pub(crate) fn execute_idea(config: &IdeaConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let location = load_location(&config.location_path, ARG_LOCATION)?;
    let mut random = seeded(config.seed);
    let analysis = analyze_business_idea(config.kind, &location, &mut random).map_err(
        |source| CliError::InvalidLocation {
            path: config.location_path.clone(),
            source,
        },
    )?;
    write_json(&analysis, writer)
}
