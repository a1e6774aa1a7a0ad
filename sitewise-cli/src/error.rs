//! Error type shared by every subcommand.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use sitewise_core::{LocationProfileError, ParseArchetypeError};
use sitewise_scorer::ParseTrafficPeriodError;
use thiserror::Error;

/// Errors emitted by the Sitewise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The log filter directive could not be parsed.
    #[error("invalid log filter {directive:?}: {message}")]
    LogFilter {
        /// Directive supplied by the caller.
        directive: String,
        /// Parser diagnostic.
        message: String,
    },
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// CLI name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The location file does not exist or is not a regular file.
    #[error("{field} path {path} does not exist")]
    MissingSourceFile {
        /// CLI name of the option naming the file.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// The location file could not be opened or read.
    #[error("failed to open location file {path}")]
    OpenLocation {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The location file is not a valid `LocationProfile` document.
    #[error("failed to parse location file {path}")]
    ParseLocation {
        /// Path whose contents failed to decode.
        path: Utf8PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// The decoded location failed validation.
    #[error("invalid location in {path}")]
    InvalidLocation {
        /// Path the location came from.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: LocationProfileError,
    },
    /// The `--kind` option does not name a business archetype.
    #[error(transparent)]
    InvalidKind(#[from] ParseArchetypeError),
    /// The `--period` option does not name a traffic period.
    #[error(transparent)]
    InvalidPeriod(#[from] ParseTrafficPeriodError),
    /// Serialising the result to JSON failed.
    #[error("failed to serialise output")]
    Serialise(#[source] serde_json::Error),
    /// Writing the result to stdout failed.
    #[error("failed to write output")]
    WriteOutput(#[source] io::Error),
}
