use crate::cli::{RegistryArgs, RegistryCommands};
use crate::error::Result;
use crate::registry::RegistryManager;
use mdpreview::core::forcefield::registry::{EntryPoint, SMIRNOFF_DIRECTORY_GROUP};
use std::path::PathBuf;
use tracing::info;

pub fn run(args: RegistryArgs) -> Result<()> {
    match args.command {
        RegistryCommands::Path => handle_path(),
        RegistryCommands::SetPath { path } => handle_set_path(path),
        RegistryCommands::ResetPath => handle_reset_path(),
        RegistryCommands::List { group } => handle_list(group),
        RegistryCommands::Add {
            name,
            directories,
            group,
        } => handle_add(name, directories, group),
    }
}

fn handle_path() -> Result<()> {
    let manager = RegistryManager::new()?;
    println!("{}", manager.get_registry_path().display());
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    let absolute_path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    RegistryManager::set_custom_path(&absolute_path)?;
    info!("Registry path set to {:?}", &absolute_path);
    println!("✓ Registry path set to: {}", absolute_path.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    RegistryManager::reset_path()?;
    let manager = RegistryManager::new()?;
    println!(
        "✓ Registry path reset to default: {}",
        manager.get_registry_path().display()
    );
    Ok(())
}

fn handle_list(group: Option<String>) -> Result<()> {
    let manager = RegistryManager::new()?;
    let entries = list_entries(&manager, group.as_deref())?;
    if entries.is_empty() {
        println!("No entry points registered.");
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{} [{}] -> {}",
            entry.name(),
            entry.group(),
            entry.list_directories().join(", ")
        );
    }
    Ok(())
}

fn handle_add(name: String, directories: Vec<String>, group: Option<String>) -> Result<()> {
    let manager = RegistryManager::new()?;
    add_entry(&manager, name, directories, group)?;
    println!(
        "✓ Registry updated: {}",
        manager.get_registry_path().display()
    );
    Ok(())
}

/// Entry points of the registry, optionally restricted to one discovery group.
fn list_entries(manager: &RegistryManager, group: Option<&str>) -> Result<Vec<EntryPoint>> {
    let registry = manager.load()?;
    let entries = match group {
        Some(group) => registry.select(group).cloned().collect(),
        None => registry.entry_points().to_vec(),
    };
    Ok(entries)
}

/// Appends an entry point and saves the registry, creating the file if needed.
fn add_entry(
    manager: &RegistryManager,
    name: String,
    directories: Vec<String>,
    group: Option<String>,
) -> Result<EntryPoint> {
    let mut registry = manager.load()?;
    let group = group.unwrap_or_else(|| SMIRNOFF_DIRECTORY_GROUP.to_string());

    info!("Registering '{}' in group '{}'.", &name, &group);
    let entry = EntryPoint::new(group, name, directories);
    registry.register(entry.clone());
    manager.save(&registry)?;
    Ok(entry)
}
