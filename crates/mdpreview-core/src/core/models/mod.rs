//! # Core Models Module
//!
//! Data structures describing the molecules of a system.
//!
//! ## Key Components
//!
//! - [`molecule`] - The [`Molecule`](molecule::Molecule) trait and a SMILES-backed implementation
//! - [`topology`] - An ordered, read-only collection of molecules
//!
//! ## Usage
//!
//! ```ignore
//! use mdpreview::core::models::{molecule::SmilesMolecule, topology::Topology};
//!
//! let topology = Topology::from_molecules(vec![
//!     SmilesMolecule::new("[H][O][H]"),
//!     SmilesMolecule::new("[H][O][H]"),
//! ]);
//! assert_eq!(topology.len(), 2);
//! ```

pub mod molecule;
pub mod topology;
