//! # Force-Field Module
//!
//! Discovery of force-field definition directories.
//!
//! Packages that ship force-field files register themselves as *entry points*: named
//! records in a discovery group, each able to list the directories it provides. The
//! registry is configuration driven: it is read from a TOML file rather than loaded
//! dynamically, so any installation can describe its providers declaratively.
//!
//! ```ignore
//! use mdpreview::core::forcefield::registry::EntryPointRegistry;
//!
//! let registry = EntryPointRegistry::load("entry-points.toml".as_ref())?;
//! for entry in registry.select("openforcefield.smirnoff_forcefield_directory") {
//!     println!("{} -> {:?}", entry.name(), entry.list_directories());
//! }
//! ```

pub mod registry;
