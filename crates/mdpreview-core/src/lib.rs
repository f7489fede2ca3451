//! # mdpreview Core Library
//!
//! Notebook-scale helpers for molecular modeling sessions: summarizing the molecules in a
//! topology, finding force-field definition files published by installed providers, and
//! driving short, clock-bounded molecular dynamics previews on an external engine.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that each concern can be tested in isolation.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Topology`, `SmilesMolecule`),
//!   file formats (SMILES lists, DCD trajectories) and the entry-point registry that lists
//!   force-field directory providers.
//!
//! - **[`engine`]: The Simulation Seam.** Traits describing the external simulation engine
//!   (`Interchange`, `Simulation`), the integrator configuration, trajectory reporters and the
//!   wall-clock bounded `SimulationRunner`.
//!
//! - **[`workflows`]: The Public API.** The user-facing procedures `count`, `locate` and
//!   `preview`, each a single-pass operation with no state retained between calls.
//!
//! The chemistry toolkit (canonical SMILES) and the simulation engine (forces, integration,
//! velocity sampling) are never reimplemented here; they enter through the traits above.

pub mod core;
pub mod engine;
pub mod workflows;
