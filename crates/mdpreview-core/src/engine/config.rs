use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TEMPERATURE_KELVIN: f64 = 300.0;
pub const DEFAULT_FRICTION_PER_PS: f64 = 1.0;
pub const DEFAULT_TIMESTEP_PS: f64 = 0.002;
pub const DEFAULT_REPORTER_FREQUENCY: u64 = 100;
pub const DEFAULT_TRAJECTORY_NAME: &str = "preview.dcd";
pub const DEFAULT_CLOCK_TIME: Duration = Duration::from_secs(60);

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

/// Langevin thermostat integrator settings handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LangevinIntegrator {
    pub temperature_kelvin: f64,
    pub friction_per_ps: f64,
    pub timestep_ps: f64,
}

impl Default for LangevinIntegrator {
    fn default() -> Self {
        Self {
            temperature_kelvin: DEFAULT_TEMPERATURE_KELVIN,
            friction_per_ps: DEFAULT_FRICTION_PER_PS,
            timestep_ps: DEFAULT_TIMESTEP_PS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub integrator: LangevinIntegrator,
    /// Steps between trajectory frames. Checked when the run starts, not here.
    pub reporter_frequency: u64,
    pub trajectory_path: PathBuf,
    pub clock_time: Duration,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            integrator: LangevinIntegrator::default(),
            reporter_frequency: DEFAULT_REPORTER_FREQUENCY,
            trajectory_path: PathBuf::from(DEFAULT_TRAJECTORY_NAME),
            clock_time: DEFAULT_CLOCK_TIME,
        }
    }
}

#[derive(Default)]
pub struct PreviewConfigBuilder {
    integrator: Option<LangevinIntegrator>,
    reporter_frequency: Option<u64>,
    trajectory_path: Option<PathBuf>,
    clock_time: Option<Duration>,
}

impl PreviewConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn integrator(mut self, integrator: LangevinIntegrator) -> Self {
        self.integrator = Some(integrator);
        self
    }
    pub fn reporter_frequency(mut self, steps: u64) -> Self {
        self.reporter_frequency = Some(steps);
        self
    }
    pub fn trajectory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.trajectory_path = Some(path.into());
        self
    }
    pub fn clock_time(mut self, duration: Duration) -> Self {
        self.clock_time = Some(duration);
        self
    }

    pub fn build(self) -> Result<PreviewConfig, ConfigError> {
        let defaults = PreviewConfig::default();
        let integrator = self.integrator.unwrap_or(defaults.integrator);
        let clock_time = self.clock_time.unwrap_or(defaults.clock_time);

        positive("temperature_kelvin", integrator.temperature_kelvin)?;
        positive("timestep_ps", integrator.timestep_ps)?;
        if !integrator.friction_per_ps.is_finite() || integrator.friction_per_ps < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "friction_per_ps",
                reason: "must be finite and non-negative",
            });
        }
        if clock_time.is_zero() {
            return Err(ConfigError::InvalidParameter {
                name: "clock_time",
                reason: "must be longer than zero",
            });
        }

        Ok(PreviewConfig {
            integrator,
            reporter_frequency: self
                .reporter_frequency
                .unwrap_or(defaults.reporter_frequency),
            trajectory_path: self.trajectory_path.unwrap_or(defaults.trajectory_path),
            clock_time,
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            reason: "must be finite and positive",
        })
    }
}
