use mdpreview::core::forcefield::registry::SMIRNOFF_DIRECTORY_GROUP;
use mdpreview::workflows::locate::OPENFORCEFIELDS_MARKER;

pub struct DefaultsConfig {
    pub group: String,
    pub marker: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            group: SMIRNOFF_DIRECTORY_GROUP.to_string(),
            marker: OPENFORCEFIELDS_MARKER.to_string(),
        }
    }
}
