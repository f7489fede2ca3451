//! # Core Module
//!
//! Fundamental building blocks shared by every workflow.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Molecules and the ordered topologies holding them
//! - **File I/O** ([`io`]) - SMILES list topologies and DCD trajectory output
//! - **Force-Field Discovery** ([`forcefield`]) - The entry-point registry of directory providers
//! - **Utilities** ([`utils`]) - Identifier classification helpers

pub mod forcefield;
pub mod io;
pub mod models;
pub mod utils;
