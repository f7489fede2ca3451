use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Discovery group under which SMIRNOFF force-field directory providers register.
pub const SMIRNOFF_DIRECTORY_GROUP: &str = "openforcefield.smirnoff_forcefield_directory";

/// A registered capability provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct EntryPoint {
    group: String,
    name: String,
    #[serde(default)]
    directories: Vec<String>,
}

impl EntryPoint {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        directories: Vec<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            directories,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directories this provider publishes, in declaration order.
    pub fn list_directories(&self) -> &[String] {
        &self.directories
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(rename = "entry-point", default)]
    entry_points: Vec<EntryPoint>,
}

/// The ordered list of entry points known to this installation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPointRegistry {
    entry_points: Vec<EntryPoint>,
}

impl EntryPointRegistry {
    pub fn new(entry_points: Vec<EntryPoint>) -> Self {
        Self { entry_points }
    }

    pub fn load(path: &Path) -> Result<Self, RegistryLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            RegistryLoadError::Parse { source, .. } => RegistryLoadError::Toml {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RegistryLoadError> {
        let file: RegistryFile =
            toml::from_str(content).map_err(|e| RegistryLoadError::Parse { source: e })?;
        Ok(Self {
            entry_points: file.entry_points,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), RegistryLoadError> {
        let file = RegistryFile {
            entry_points: self.entry_points.clone(),
        };
        let content = toml::to_string_pretty(&file)
            .map_err(|e| RegistryLoadError::Serialize { source: e })?;
        std::fs::write(path, content).map_err(|e| RegistryLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn register(&mut self, entry_point: EntryPoint) {
        self.entry_points.push(entry_point);
    }

    /// Entry points of one discovery group, in registration order.
    pub fn select<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a EntryPoint> + 'a {
        self.entry_points.iter().filter(move |ep| ep.group == group)
    }

    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }

    pub fn len(&self) -> usize {
        self.entry_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_points.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum RegistryLoadError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}", path = path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("TOML parsing error: {source}")]
    Parse { source: toml::de::Error },
    #[error("TOML serialization error: {source}")]
    Serialize { source: toml::ser::Error },
}
