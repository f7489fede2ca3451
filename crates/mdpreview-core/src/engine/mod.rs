//! # Engine Module
//!
//! The seam between this library and an external molecular dynamics engine.
//!
//! ## Overview
//!
//! Force evaluation, integration and velocity sampling belong to the engine. This module
//! describes what the library needs from it ([`simulation::Interchange`],
//! [`simulation::Simulation`]) and owns the orchestration around it: the integrator
//! settings, periodic trajectory reporters and the wall-clock bounded runner.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Integrator constants and preview run settings
//! - **Simulation Traits** ([`simulation`]) - The engine contract and state snapshots
//! - **Reporters** ([`reporter`]) - Periodic observers such as the DCD trajectory writer
//! - **Runner** ([`runner`]) - Stepping loop that stops after a wall-clock budget
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine error type

pub mod config;
pub mod error;
pub mod progress;
pub mod reporter;
pub mod runner;
pub mod simulation;
