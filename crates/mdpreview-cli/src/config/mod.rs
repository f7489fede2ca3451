mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_locate_config;
pub use models::LocateAppConfig;
