use crate::error::{CliError, Result};
use directories::ProjectDirs;
use mdpreview::core::forcefield::registry::EntryPointRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const REGISTRY_FILE_NAME: &str = "entry-points.toml";
const PATH_CONFIG_FILE_NAME: &str = "path.conf";

/// Resolves and manages the location of the entry-point registry file.
#[derive(Debug)]
pub struct RegistryManager {
    registry_path: PathBuf,
}

impl RegistryManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_registry_path()?;
        debug!("RegistryManager initialized with path: {:?}", &path);
        Ok(Self {
            registry_path: path,
        })
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self {
            registry_path: path,
        }
    }

    pub fn get_registry_path(&self) -> &Path {
        &self.registry_path
    }

    /// Loads the registry; a registry file that does not exist yet is treated as empty.
    pub fn load(&self) -> Result<EntryPointRegistry> {
        if !self.registry_path.exists() {
            warn!(
                "Registry file {:?} does not exist; no entry points are registered.",
                &self.registry_path
            );
            return Ok(EntryPointRegistry::default());
        }
        info!("Loading entry points from {:?}", &self.registry_path);
        Ok(EntryPointRegistry::load(&self.registry_path)?)
    }

    pub fn save(&self, registry: &EntryPointRegistry) -> Result<()> {
        if let Some(parent) = self.registry_path.parent() {
            fs::create_dir_all(parent)?;
        }
        registry.save(&self.registry_path)?;
        info!("Registry written to {:?}", &self.registry_path);
        Ok(())
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        let path_str = path.to_str().ok_or_else(|| {
            CliError::Argument(format!("Registry path is not valid UTF-8: {:?}", path))
        })?;
        let config_path = Self::get_path_config_file()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, path_str).map_err(CliError::from)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn determine_registry_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) if config_path.exists() => {
                Self::read_custom_path(&config_path)
                    .map_or_else(Self::get_default_registry_path, Ok)
            }
            _ => Self::get_default_registry_path(),
        }
    }

    fn read_custom_path(config_path: &Path) -> Option<PathBuf> {
        let custom_path_str = match fs::read_to_string(config_path) {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                warn!("Could not read {:?}: {}", config_path, e);
                return None;
            }
        };
        if custom_path_str.is_empty() {
            warn!("Custom path config file is empty, falling back to default path.");
            None
        } else {
            Some(PathBuf::from(custom_path_str))
        }
    }

    fn get_path_config_file() -> Result<PathBuf> {
        ProjectDirs::from("edu", "caltech", "mdpreview")
            .map(|dirs| dirs.config_dir().join(PATH_CONFIG_FILE_NAME))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_registry_path() -> Result<PathBuf> {
        ProjectDirs::from("edu", "caltech", "mdpreview")
            .map(|dirs| dirs.config_dir().join(REGISTRY_FILE_NAME))
            .ok_or_else(|| {
                CliError::Data("Could not determine default registry file path.".to_string())
            })
    }
}
