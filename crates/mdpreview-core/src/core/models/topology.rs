use super::molecule::Molecule;

/// An ordered collection of molecules making up a simulated system.
///
/// The topology owns its molecules and only exposes read access; workflows iterate it in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology<M> {
    molecules: Vec<M>,
}

impl<M> Default for Topology<M> {
    fn default() -> Self {
        Self {
            molecules: Vec::new(),
        }
    }
}

impl<M: Molecule> Topology<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_molecules(molecules: Vec<M>) -> Self {
        Self { molecules }
    }

    pub fn add_molecule(&mut self, molecule: M) {
        self.molecules.push(molecule);
    }

    pub fn molecules(&self) -> impl Iterator<Item = &M> {
        self.molecules.iter()
    }

    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }
}

impl<M: Molecule> FromIterator<M> for Topology<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self {
            molecules: iter.into_iter().collect(),
        }
    }
}
