//! Provides input/output functionality for the file formats used by the workflows.
//!
//! Topologies are read from SMILES list files through the [`traits::TopologyFile`] interface,
//! and trajectories are written in the binary DCD layout understood by common
//! molecular dynamics analysis tools.

pub mod dcd;
pub mod smi;
pub mod traits;
