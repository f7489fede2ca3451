use super::traits::TopologyFile;
use crate::core::models::molecule::SmilesMolecule;
use crate::core::models::topology::Topology;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmiError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line_num}: Invalid SMILES record: {message}")]
    Parse { line_num: usize, message: String },
}

/// SMILES list format: one molecule per line, `SMILES [title...]`.
///
/// Blank lines and lines starting with `#` are ignored. Everything after the first run of
/// whitespace is kept as the molecule title.
pub struct SmiFile;

impl TopologyFile for SmiFile {
    type Molecule = SmilesMolecule;
    type Error = SmiError;

    fn read_from(reader: &mut impl BufRead) -> Result<Topology<SmilesMolecule>, SmiError> {
        let mut topology = Topology::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => SmiError::Parse {
                    line_num: index + 1,
                    message: "line is not valid UTF-8".to_string(),
                },
                _ => SmiError::Io(e),
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (smiles, title) = match trimmed.split_once(char::is_whitespace) {
                Some((smiles, rest)) => (smiles, Some(rest.trim())),
                None => (trimmed, None),
            };

            if smiles.contains(|c: char| c.is_control()) {
                return Err(SmiError::Parse {
                    line_num: index + 1,
                    message: format!("identifier '{}' contains control characters", smiles),
                });
            }

            let molecule = match title.filter(|t| !t.is_empty()) {
                Some(title) => SmilesMolecule::new(smiles).with_title(title),
                None => SmilesMolecule::new(smiles),
            };
            topology.add_molecule(molecule);
        }

        Ok(topology)
    }

    fn write_to(
        topology: &Topology<SmilesMolecule>,
        writer: &mut impl Write,
    ) -> Result<(), SmiError> {
        for molecule in topology.molecules() {
            writeln!(writer, "{}", molecule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn invalid_utf8_reports_line_number() {
        let content: &[u8] = b"CCO\nO\nC\xffC\n";
        let result = SmiFile::read_from(&mut Cursor::new(content));
        assert!(matches!(result, Err(SmiError::Parse { line_num: 3, .. })));
    }

    #[test]
    fn read_skips_comments_and_blank_lines() {
        let content = "# solvated complex\n\n[H][O][H] water\nCCO\n   \n[Na+]\n";
        let topology = SmiFile::read_from(&mut Cursor::new(content)).unwrap();

        let molecules: Vec<_> = topology.molecules().collect();
        assert_eq!(molecules.len(), 3);
        assert_eq!(molecules[0].smiles(), "[H][O][H]");
        assert_eq!(molecules[0].title(), Some("water"));
        assert_eq!(molecules[1].smiles(), "CCO");
        assert_eq!(molecules[1].title(), None);
        assert_eq!(molecules[2].smiles(), "[Na+]");
    }

    #[test]
    fn read_keeps_multi_word_titles() {
        let content = "c1ccccc1\tbenzene ring  solvent\n";
        let topology = SmiFile::read_from(&mut Cursor::new(content)).unwrap();
        let molecule = topology.molecules().next().unwrap();
        assert_eq!(molecule.title(), Some("benzene ring  solvent"));
    }

    #[test]
    fn read_rejects_control_characters() {
        let content = "CCO\nC\u{7}C\n";
        let result = SmiFile::read_from(&mut Cursor::new(content));
        assert!(matches!(result, Err(SmiError::Parse { line_num: 2, .. })));
    }

    #[test]
    fn write_then_read_preserves_order_and_titles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("system.smi");

        let topology = Topology::from_molecules(vec![
            SmilesMolecule::new("CC(=O)Nc1ccc(O)cc1").with_title("paracetamol"),
            SmilesMolecule::new("O"),
        ]);
        SmiFile::write_to_path(&topology, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "CC(=O)Nc1ccc(O)cc1 paracetamol\nO\n");

        let reread = SmiFile::read_from_path(&path).unwrap();
        assert_eq!(reread, topology);
    }

    #[test]
    fn read_from_missing_path_is_io_error() {
        let dir = tempdir().unwrap();
        let result = SmiFile::read_from_path(dir.path().join("absent.smi"));
        assert!(matches!(result, Err(SmiError::Io(_))));
    }
}
