use crate::engine::config::{PreviewConfig, PreviewConfigBuilder};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::reporter::DcdReporter;
use crate::engine::runner::{RunSummary, SimulationRunner};
use crate::engine::simulation::{Interchange, Simulation};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSummary {
    pub trajectory_path: PathBuf,
    pub run: RunSummary,
}

/// Runs a one-minute preview with the default integrator, writing `trajectory_name` every
/// `reporter_frequency` steps.
pub fn run_openmm<I: Interchange>(
    interchange: &I,
    reporter_frequency: u64,
    trajectory_name: impl AsRef<Path>,
) -> Result<PreviewSummary, EngineError> {
    let config = PreviewConfigBuilder::new()
        .reporter_frequency(reporter_frequency)
        .trajectory_path(trajectory_name.as_ref())
        .build()
        .map_err(|e| EngineError::Initialization(e.to_string()))?;
    run(interchange, &config, &ProgressReporter::new())
}

#[instrument(skip_all, name = "preview_workflow")]
pub fn run<I: Interchange>(
    interchange: &I,
    config: &PreviewConfig,
    reporter: &ProgressReporter,
) -> Result<PreviewSummary, EngineError> {
    let mut runner = reporter.phase("Preparation", || {
        let simulation = interchange.to_simulation(&config.integrator)?;
        info!(
            "Simulation created with {} particle(s); timestep {} ps.",
            simulation.num_particles(),
            simulation.timestep_ps()
        );

        let mut runner = SimulationRunner::new(simulation);
        runner.add_reporter(Box::new(DcdReporter::new(
            &config.trajectory_path,
            config.reporter_frequency,
        )?));
        runner
            .simulation_mut()
            .set_velocities_to_temperature(config.integrator.temperature_kelvin)?;
        Ok::<_, EngineError>(runner)
    })?;

    let run = reporter.phase("Molecular dynamics", || {
        runner.run_for_clock_time(config.clock_time, reporter)
    })?;

    reporter.report(Progress::Message(format!(
        "{} steps, {} frame(s) written to {}",
        run.steps_taken,
        run.reports_written,
        config.trajectory_path.display()
    )));
    info!(
        "Preview finished: {} steps in {:?}.",
        run.steps_taken, run.elapsed
    );

    Ok(PreviewSummary {
        trajectory_path: config.trajectory_path.clone(),
        run,
    })
}
