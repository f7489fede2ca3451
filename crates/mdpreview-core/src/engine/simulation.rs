use super::config::LangevinIntegrator;
use super::error::EngineError;
use nalgebra::{Point3, Vector3};

/// A snapshot of the simulation handed to reporters.
///
/// Positions and box vectors are in nanometers; time is in picoseconds.
#[derive(Debug, Clone, Copy)]
pub struct SimulationState<'a> {
    pub step: u64,
    pub time_ps: f64,
    pub positions: &'a [Point3<f64>],
    pub box_vectors: Option<[Vector3<f64>; 3]>,
}

/// A running simulation owned by an external molecular dynamics engine.
pub trait Simulation {
    fn num_particles(&self) -> usize;

    /// Number of integration steps taken since the simulation was created.
    fn current_step(&self) -> u64;

    fn timestep_ps(&self) -> f64;

    /// Draws velocities from the Maxwell–Boltzmann distribution at the given temperature.
    fn set_velocities_to_temperature(&mut self, temperature_kelvin: f64)
    -> Result<(), EngineError>;

    /// Advances the integrator by `steps` steps.
    fn step(&mut self, steps: u64) -> Result<(), EngineError>;

    fn state(&self) -> SimulationState<'_>;
}

/// A parameterized system that the engine can turn into a runnable simulation.
pub trait Interchange {
    type Simulation: Simulation;

    fn to_simulation(
        &self,
        integrator: &LangevinIntegrator,
    ) -> Result<Self::Simulation, EngineError>;
}
