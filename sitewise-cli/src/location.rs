//! Loading and validating the location document every subcommand consumes.

use std::io::BufReader;

use camino::Utf8Path;
use sitewise_core::LocationProfile;

use crate::CliError;
use crate::fs::{file_is_file, open_utf8_file};

/// Read a `LocationProfile` JSON file and validate it.
pub(crate) fn load_location(
    path: &Utf8Path,
    field: &'static str,
) -> Result<LocationProfile, CliError> {
    let present = file_is_file(path).map_err(|source| CliError::OpenLocation {
        path: path.to_path_buf(),
        source,
    })?;
    if !present {
        return Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        });
    }

    let file = open_utf8_file(path).map_err(|source| CliError::OpenLocation {
        path: path.to_path_buf(),
        source,
    })?;
    let location: LocationProfile = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| CliError::ParseLocation {
            path: path.to_path_buf(),
            source,
        },
    )?;
    location
        .validate()
        .map_err(|source| CliError::InvalidLocation {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "loaded location {} at ({}, {})",
        location.name.as_deref().unwrap_or("<unnamed>"),
        location.lat,
        location.lng
    );
    Ok(location)
}
