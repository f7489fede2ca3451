use crate::core::models::molecule::Molecule;
use crate::core::models::topology::Topology;
use crate::core::utils::classify::{MoleculeLabel, classify};
use std::collections::HashMap;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum CountError {
    /// Canonicalization failure raised by the molecule implementation.
    #[error(transparent)]
    Canonicalization(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Failed to write molecule summary: {0}")]
    Io(#[from] io::Error),
}

/// Occurrence counts per canonical identifier, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoleculeCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl MoleculeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, identifier: String) {
        match self.index.get(&identifier) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(identifier.clone(), self.entries.len());
                self.entries.push((identifier, 1));
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<usize> {
        self.index.get(identifier).map(|&slot| self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(id, count)| (id.as_str(), *count))
    }

    /// Distinct identifiers with their labels and counts.
    pub fn labeled(&self) -> impl Iterator<Item = (MoleculeLabel, usize)> + '_ {
        self.iter().map(|(id, count)| (classify(id), count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Writes one `<label> : <count> molecule(s)` line per distinct identifier.
    pub fn write_summary(&self, writer: &mut impl Write) -> io::Result<()> {
        for (label, count) in self.labeled() {
            writeln!(writer, "{} : {} molecule(s)", label, count)?;
        }
        Ok(())
    }
}

pub fn count_molecules<M: Molecule>(topology: &Topology<M>) -> Result<MoleculeCounts, CountError> {
    let mut counts = MoleculeCounts::new();
    for molecule in topology.molecules() {
        let smiles = molecule
            .to_smiles()
            .map_err(|e| CountError::Canonicalization(Box::new(e)))?;
        counts.add(smiles);
    }
    debug!(
        "Counted {} molecule(s) across {} distinct identifier(s).",
        counts.total(),
        counts.len()
    );
    Ok(counts)
}

/// Counts the molecules of `topology` and prints the summary to standard output.
#[instrument(skip_all, name = "count_workflow")]
pub fn run<M: Molecule>(topology: &Topology<M>) -> Result<MoleculeCounts, CountError> {
    let counts = count_molecules(topology)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    counts.write_summary(&mut handle)?;
    handle.flush()?;
    Ok(counts)
}
