use crate::error::{CliError, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Maps `-q` and the number of `-v` flags to the console level.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: compact stderr output, plus a plain-text copy in
/// `log_file` when one is given.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = match log_file.as_deref() {
        Some(path) => Some(
            fmt::layer()
                .with_writer(open_log_file(path)?)
                .with_ansi(false)
                .with_thread_ids(true)
                .with_target(true),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(level_for(verbosity, quiet))
        .with(console)
        .with(file_layer)
        .init();

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path).map_err(CliError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdpreview::core::forcefield::registry::{
        EntryPoint, EntryPointRegistry, SMIRNOFF_DIRECTORY_GROUP,
    };
    use serial_test::serial;
    use tracing::{debug, info};

    #[test]
    fn quiet_wins_over_verbosity() {
        assert_eq!(level_for(0, true), LevelFilter::OFF);
        assert_eq!(level_for(3, true), LevelFilter::OFF);
    }

    #[test]
    fn verbosity_steps_through_levels() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(7, false), LevelFilter::TRACE);
    }

    #[test]
    fn log_file_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("run.log");

        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn log_file_that_is_a_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_log_file(dir.path());
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    #[serial]
    fn file_layer_captures_workflow_events() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("locate.log");

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(open_log_file(&log_path).unwrap())
                .with_ansi(false)
                .with_thread_ids(true),
        );

        tracing::subscriber::with_default(subscriber, || {
            let registry = EntryPointRegistry::new(vec![EntryPoint::new(
                SMIRNOFF_DIRECTORY_GROUP,
                "unrelated",
                vec!["/opt/plugins/other".to_string()],
            )]);
            let found =
                mdpreview::workflows::locate::get_force_field_origin(&registry, "x.offxml");
            assert_eq!(found, Ok(None));
            debug!("Locator returned no match.");
        });

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Locator returned no match."));
        assert!(content.contains("Skipping entry point 'unrelated'"));
        assert!(content.contains("locate_workflow"));
        assert!(content.contains("ThreadId"));
    }

    #[test]
    #[serial]
    fn global_subscriber_installs_once() {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            setup_logging(2, false, None).expect("Failed to set up global logger for tests");
        });
        info!("global subscriber active");
    }
}
