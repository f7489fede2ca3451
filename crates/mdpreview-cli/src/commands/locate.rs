use crate::cli::LocateArgs;
use crate::config::{LocateAppConfig, build_locate_config};
use crate::error::Result;
use crate::registry::RegistryManager;
use mdpreview::workflows::locate;
use std::path::PathBuf;
use tracing::{info, warn};

pub fn run(args: LocateArgs) -> Result<()> {
    let registry_manager = RegistryManager::new()?;
    let config = build_locate_config(&args, &registry_manager)?;

    match find(&config)? {
        Some(path) => println!("{}", path.display()),
        None => {
            warn!(
                "No '{}' found under entry points of group '{}'.",
                config.force_field, config.locator.group
            );
            eprintln!(
                "No force field file named '{}' was found in any '{}' directory.",
                config.force_field, config.locator.marker
            );
        }
    }
    Ok(())
}

fn find(config: &LocateAppConfig) -> Result<Option<PathBuf>> {
    let registry = RegistryManager::with_custom_path(config.registry_path.clone()).load()?;
    info!(
        "Searching {} entry point(s) of group '{}'.",
        registry.select(&config.locator.group).count(),
        config.locator.group
    );
    Ok(locate::find_with_config(
        &registry,
        &config.locator,
        &config.force_field,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use mdpreview::core::forcefield::registry::{
        EntryPoint, EntryPointRegistry, SMIRNOFF_DIRECTORY_GROUP,
    };
    use mdpreview::workflows::locate::{LocateError, LocatorConfig};
    use std::fs;
    use tempfile::tempdir;

    fn app_config(registry_path: PathBuf, force_field: &str) -> LocateAppConfig {
        LocateAppConfig {
            force_field: force_field.to_string(),
            registry_path,
            locator: LocatorConfig::default(),
        }
    }

    #[test]
    fn find_resolves_file_through_registry_on_disk() {
        let dir = tempdir().unwrap();
        let ff_dir = dir.path().join("site-packages/openforcefields/offxml");
        fs::create_dir_all(&ff_dir).unwrap();
        fs::write(ff_dir.join("openff-2.1.0.offxml"), "<SMIRNOFF/>").unwrap();

        let registry_path = dir.path().join("entry-points.toml");
        EntryPointRegistry::new(vec![EntryPoint::new(
            SMIRNOFF_DIRECTORY_GROUP,
            "openff",
            vec![ff_dir.to_string_lossy().into_owned()],
        )])
        .save(&registry_path)
        .unwrap();

        let found = find(&app_config(registry_path, "openff-2.1.0.offxml")).unwrap();
        assert_eq!(found, Some(ff_dir.join("openff-2.1.0.offxml")));
    }

    #[test]
    fn find_with_missing_registry_returns_none() {
        let dir = tempdir().unwrap();
        let found = find(&app_config(dir.path().join("absent.toml"), "x.offxml")).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn find_surfaces_directory_count_violations() {
        let dir = tempdir().unwrap();
        let registry_path = dir.path().join("entry-points.toml");
        EntryPointRegistry::new(vec![EntryPoint::new(
            SMIRNOFF_DIRECTORY_GROUP,
            "empty",
            vec![],
        )])
        .save(&registry_path)
        .unwrap();

        let result = find(&app_config(registry_path, "x.offxml"));
        assert!(matches!(
            result,
            Err(CliError::Locate(LocateError::DirectoryCount { count: 0, .. }))
        ));
    }
}
