use std::fmt;

/// Identifiers longer than this many characters are treated as proteins.
pub const PROTEIN_MIN_EXCLUSIVE: usize = 1000;
/// Identifiers longer than this many characters (up to the protein threshold) are ligands.
pub const LIGAND_MIN_EXCLUSIVE: usize = 10;

/// Coarse label derived from the length of a canonical identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoleculeLabel {
    Protein,
    Ligand,
    /// Short identifiers (ions, water, small solvents) are shown verbatim.
    Other(String),
}

impl fmt::Display for MoleculeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protein => f.write_str("protein"),
            Self::Ligand => f.write_str("ligand"),
            Self::Other(identifier) => f.write_str(identifier),
        }
    }
}

pub fn classify(identifier: &str) -> MoleculeLabel {
    let length = identifier.chars().count();
    if length > PROTEIN_MIN_EXCLUSIVE {
        MoleculeLabel::Protein
    } else if length > LIGAND_MIN_EXCLUSIVE {
        MoleculeLabel::Ligand
    } else {
        MoleculeLabel::Other(identifier.to_string())
    }
}
