use super::error::EngineError;
use super::simulation::SimulationState;
use crate::core::io::dcd::{DcdHeaderSpec, DcdWriter, UnitCell};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An observer invoked by the runner every `report_interval` steps.
pub trait Reporter {
    fn report_interval(&self) -> u64;

    fn report(&mut self, state: &SimulationState<'_>, timestep_ps: f64)
    -> Result<(), EngineError>;

    /// Called once after the run loop ends.
    fn finalize(&mut self) -> Result<(), EngineError> {
        Ok(())
    }

    /// Number of steps until this reporter is next due, counted from `current_step`.
    fn steps_until_next_report(&self, current_step: u64) -> u64 {
        let interval = self.report_interval();
        interval - current_step % interval
    }
}

/// Writes particle positions to a DCD trajectory file.
///
/// The file is created when the reporter is constructed; the header is written on the first
/// report, once the particle count and the presence of a periodic box are known.
pub struct DcdReporter {
    path: PathBuf,
    interval: u64,
    file: Option<File>,
    writer: Option<DcdWriter<BufWriter<File>>>,
}

impl DcdReporter {
    pub fn new(path: impl AsRef<Path>, interval: u64) -> Result<Self, EngineError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| EngineError::TrajectoryOpen {
            path: path.clone(),
            source: e,
        })?;
        debug!("Opened trajectory file {:?} (interval {} steps)", &path, interval);
        Ok(Self {
            path,
            interval,
            file: Some(file),
            writer: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frames_written(&self) -> u32 {
        self.writer.as_ref().map_or(0, DcdWriter::frames_written)
    }
}

impl Reporter for DcdReporter {
    fn report_interval(&self) -> u64 {
        self.interval
    }

    fn report(
        &mut self,
        state: &SimulationState<'_>,
        timestep_ps: f64,
    ) -> Result<(), EngineError> {
        if self.writer.is_none() {
            let Some(file) = self.file.take() else {
                return Err(EngineError::Initialization(format!(
                    "trajectory file {:?} is no longer open",
                    self.path
                )));
            };
            let spec = DcdHeaderSpec {
                num_atoms: state.positions.len(),
                first_step: state.step,
                interval: self.interval,
                timestep_ps,
                has_unit_cell: state.box_vectors.is_some(),
                title: format!("Preview trajectory, one frame every {} steps", self.interval),
            };
            self.writer = Some(DcdWriter::new(BufWriter::new(file), spec)?);
        }

        if let Some(writer) = self.writer.as_mut() {
            let unit_cell = state.box_vectors.as_ref().map(UnitCell::from_box_vectors);
            writer.write_frame(state.positions, unit_cell.as_ref())?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), EngineError> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}
