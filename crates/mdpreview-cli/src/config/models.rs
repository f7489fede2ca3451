use mdpreview::workflows::locate::LocatorConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocateAppConfig {
    pub force_field: String,
    pub registry_path: PathBuf,
    pub locator: LocatorConfig,
}
