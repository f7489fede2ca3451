use std::convert::Infallible;
use std::fmt;

/// A molecule that can be reduced to a canonical string identifier.
///
/// Two molecules are considered identical by the counting workflow when their canonical
/// SMILES strings are equal. Producing that string (perception, aromaticity, atom ordering)
/// is the implementor's responsibility; a cheminformatics toolkit binding is the usual source.
pub trait Molecule {
    /// The error raised when canonicalization fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the canonical SMILES identifier of this molecule.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the underlying toolkit cannot canonicalize the molecule.
    fn to_smiles(&self) -> Result<String, Self::Error>;
}

/// A molecule whose canonical SMILES was computed upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SmilesMolecule {
    smiles: String,
    title: Option<String>,
}

impl SmilesMolecule {
    pub fn new(smiles: impl Into<String>) -> Self {
        Self {
            smiles: smiles.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Molecule for SmilesMolecule {
    type Error = Infallible;

    fn to_smiles(&self) -> Result<String, Self::Error> {
        Ok(self.smiles.clone())
    }
}

impl fmt::Display for SmilesMolecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} {}", self.smiles, title),
            None => write!(f, "{}", self.smiles),
        }
    }
}
