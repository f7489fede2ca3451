use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::LocateAppConfig;
use crate::cli::LocateArgs;
use crate::error::{CliError, Result};
use crate::registry::RegistryManager;
use crate::utils::parser;
use mdpreview::workflows::locate::LocatorConfig;
use std::path::{Path, PathBuf};

pub fn build_locate_config(
    args: &LocateArgs,
    registry_manager: &RegistryManager,
) -> Result<LocateAppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let locator_file = file_config.locator.take().unwrap_or_default();

    let group = args
        .group
        .clone()
        .or(locator_file.group)
        .unwrap_or(defaults.group);
    let marker = args
        .marker
        .clone()
        .or(locator_file.marker)
        .unwrap_or(defaults.marker);

    let registry_path = resolve_registry_path(
        args.registry.as_deref(),
        file_config.registry_path.as_deref(),
        registry_manager,
    )?;

    Ok(LocateAppConfig {
        force_field: args.force_field.clone(),
        registry_path,
        locator: LocatorConfig { group, marker },
    })
}

fn resolve_registry_path(
    cli_arg: Option<&Path>,
    file_arg: Option<&Path>,
    registry_manager: &RegistryManager,
) -> Result<PathBuf> {
    match cli_arg.or(file_arg) {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Provided registry path does not exist: {}", path.display()),
                )));
            }
            Ok(path.to_path_buf())
        }
        None => Ok(registry_manager.get_registry_path().to_path_buf()),
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_assignment(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "registry-path" => {
                config.registry_path = Some(PathBuf::from(value));
            }
            "locator.group" => {
                config.locator.get_or_insert_with(Default::default).group =
                    Some(value.to_string());
            }
            "locator.marker" => {
                config.locator.get_or_insert_with(Default::default).marker =
                    Some(value.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdpreview::core::forcefield::registry::SMIRNOFF_DIRECTORY_GROUP;
    use std::fs;
    use tempfile::tempdir;

    fn base_locate_args() -> LocateArgs {
        LocateArgs {
            force_field: "openff-2.1.0.offxml".to_string(),
            config: None,
            registry: None,
            group: None,
            marker: None,
            set_values: vec![],
        }
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let dir = tempdir().unwrap();
        let default_path = dir.path().join("entry-points.toml");
        let manager = RegistryManager::with_custom_path(default_path.clone());

        let app = build_locate_config(&base_locate_args(), &manager).expect("build ok");

        assert_eq!(app.force_field, "openff-2.1.0.offxml");
        assert_eq!(app.registry_path, default_path);
        assert_eq!(app.locator.group, SMIRNOFF_DIRECTORY_GROUP);
        assert_eq!(app.locator.marker, "openforcefields");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let registry_path = dir.path().join("lab-registry.toml");
        fs::write(&registry_path, "").unwrap();
        let cfg_path = dir.path().join("mdpreview.toml");
        fs::write(
            &cfg_path,
            format!(
                r#"
                registry-path = "{}"

                [locator]
                group = "lab.forcefield_directory"
                marker = "lab_forcefields"
                "#,
                registry_path.display()
            ),
        )
        .unwrap();

        let mut args = base_locate_args();
        args.config = Some(cfg_path);
        let manager = RegistryManager::with_custom_path(dir.path().join("unused.toml"));

        let app = build_locate_config(&args, &manager).expect("build ok");
        assert_eq!(app.registry_path, registry_path);
        assert_eq!(app.locator.group, "lab.forcefield_directory");
        assert_eq!(app.locator.marker, "lab_forcefields");
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("mdpreview.toml");
        fs::write(&cfg_path, "[locator]\nmarker = \"from-file\"\n").unwrap();

        let mut args = base_locate_args();
        args.config = Some(cfg_path);
        args.marker = Some("from-cli".to_string());
        let manager = RegistryManager::with_custom_path(dir.path().join("r.toml"));

        let app = build_locate_config(&args, &manager).expect("build ok");
        assert_eq!(app.locator.marker, "from-cli");
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("mdpreview.toml");
        fs::write(&cfg_path, "[locator]\ngroup = \"from-file\"\n").unwrap();

        let mut args = base_locate_args();
        args.config = Some(cfg_path);
        args.set_values = vec![
            "locator.group=from-set".to_string(),
            "locator.marker=offxml".to_string(),
        ];
        let manager = RegistryManager::with_custom_path(dir.path().join("r.toml"));

        let app = build_locate_config(&args, &manager).expect("build ok");
        assert_eq!(app.locator.group, "from-set");
        assert_eq!(app.locator.marker, "offxml");
    }

    #[test]
    fn unknown_set_key_is_rejected() {
        let dir = tempdir().unwrap();
        let mut args = base_locate_args();
        args.set_values = vec!["locator.depth=3".to_string()];
        let manager = RegistryManager::with_custom_path(dir.path().join("r.toml"));

        let result = build_locate_config(&args, &manager);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("locator.depth")));
    }

    #[test]
    fn explicit_registry_path_must_exist() {
        let dir = tempdir().unwrap();
        let mut args = base_locate_args();
        args.registry = Some(dir.path().join("missing.toml"));
        let manager = RegistryManager::with_custom_path(dir.path().join("r.toml"));

        let result = build_locate_config(&args, &manager);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn unknown_file_fields_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("mdpreview.toml");
        fs::write(&cfg_path, "[locator]\nwildcard = true\n").unwrap();

        let mut args = base_locate_args();
        args.config = Some(cfg_path);
        let manager = RegistryManager::with_custom_path(dir.path().join("r.toml"));

        let result = build_locate_config(&args, &manager);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
