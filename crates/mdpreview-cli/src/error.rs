use mdpreview::core::forcefield::registry::RegistryLoadError;
use mdpreview::workflows::count::CountError;
use mdpreview::workflows::locate::LocateError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Count(#[from] CountError),

    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(transparent)]
    Registry(#[from] RegistryLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registry management error: {0}")]
    Data(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
