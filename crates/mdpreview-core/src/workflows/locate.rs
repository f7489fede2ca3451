use crate::core::forcefield::registry::{EntryPointRegistry, SMIRNOFF_DIRECTORY_GROUP};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Substring a provider directory must contain to be searched.
pub const OPENFORCEFIELDS_MARKER: &str = "openforcefields";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    /// A provider broke the one-directory-per-entry contract.
    #[error(
        "Entry point '{name}' in group '{group}' must provide exactly one directory, found {count}"
    )]
    DirectoryCount {
        group: String,
        name: String,
        count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    pub group: String,
    pub marker: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            group: SMIRNOFF_DIRECTORY_GROUP.to_string(),
            marker: OPENFORCEFIELDS_MARKER.to_string(),
        }
    }
}

/// Finds `force_field` among the SMIRNOFF force-field directories.
///
/// Returns `Ok(None)` when no marked directory contains the file.
///
/// # Errors
///
/// Fails with [`LocateError::DirectoryCount`] as soon as a visited entry point lists zero or
/// several directories; such entries are never skipped.
pub fn get_force_field_origin(
    registry: &EntryPointRegistry,
    force_field: &str,
) -> Result<Option<PathBuf>, LocateError> {
    find_with_config(registry, &LocatorConfig::default(), force_field)
}

#[instrument(skip(registry, config), name = "locate_workflow")]
pub fn find_with_config(
    registry: &EntryPointRegistry,
    config: &LocatorConfig,
    force_field: &str,
) -> Result<Option<PathBuf>, LocateError> {
    for entry_point in registry.select(&config.group) {
        let directories = entry_point.list_directories();
        let [directory] = directories else {
            return Err(LocateError::DirectoryCount {
                group: entry_point.group().to_string(),
                name: entry_point.name().to_string(),
                count: directories.len(),
            });
        };

        if !directory.contains(config.marker.as_str()) {
            debug!(
                "Skipping entry point '{}': {:?} lacks marker '{}'.",
                entry_point.name(),
                directory,
                config.marker
            );
            continue;
        }

        let candidate = Path::new(directory).join(force_field);
        if candidate.is_file() {
            info!(
                "Found '{}' via entry point '{}' at {:?}.",
                force_field,
                entry_point.name(),
                &candidate
            );
            return Ok(Some(candidate));
        }
        debug!("{:?} does not exist.", &candidate);
    }

    Ok(None)
}
