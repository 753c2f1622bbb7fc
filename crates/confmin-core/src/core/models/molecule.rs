use super::atom::Atom;
use super::conformer::Conformer;
use super::topology::Bond;
use crate::core::chemistry::formula::{FormulaError, hill_formula};
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MoleculeError {
    #[error("Conformer {conformer_idx} has {found} positions but the molecule has {expected} atoms")]
    AtomCountMismatch {
        conformer_idx: usize,
        expected: usize,
        found: usize,
    },
    #[error("Bond {bond_idx} references atom {atom_idx}, but the molecule has only {atom_count} atoms")]
    BondOutOfRange {
        bond_idx: usize,
        atom_idx: usize,
        atom_count: usize,
    },
}

/// A molecule together with every conformer known for it.
///
/// The record pairs one chemical graph (atoms and bonds) with an ordered list of
/// conformers. All conformers share the record's atom ordering; this invariant is
/// checked on construction and whenever conformers are appended.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoleculeRecord {
    /// Declared name of the molecule. May be empty.
    name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    conformers: Vec<Conformer>,
}

impl MoleculeRecord {
    /// Creates a new molecule record.
    ///
    /// # Arguments
    ///
    /// * `name` - The declared name of the molecule (may be empty).
    /// * `atoms` - The atoms of the chemical graph.
    /// * `bonds` - Bonds between atoms, addressed by atom index.
    /// * `conformers` - The known conformers, in order.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::AtomCountMismatch`] if a conformer does not have one
    /// position per atom, or [`MoleculeError::BondOutOfRange`] if a bond references
    /// an atom that does not exist.
    pub fn new(
        name: &str,
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
        conformers: Vec<Conformer>,
    ) -> Result<Self, MoleculeError> {
        let atom_count = atoms.len();
        for (bond_idx, bond) in bonds.iter().enumerate() {
            for atom_idx in [bond.atom1_idx, bond.atom2_idx] {
                if atom_idx >= atom_count {
                    return Err(MoleculeError::BondOutOfRange {
                        bond_idx,
                        atom_idx,
                        atom_count,
                    });
                }
            }
        }
        Self::check_conformers(atom_count, &conformers, 0)?;

        Ok(Self {
            name: name.to_string(),
            atoms,
            bonds,
            conformers,
        })
    }

    fn check_conformers(
        atom_count: usize,
        conformers: &[Conformer],
        first_idx: usize,
    ) -> Result<(), MoleculeError> {
        for (offset, conformer) in conformers.iter().enumerate() {
            if conformer.len() != atom_count {
                return Err(MoleculeError::AtomCountMismatch {
                    conformer_idx: first_idx + offset,
                    expected: atom_count,
                    found: conformer.len(),
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn conformers(&self) -> &[Conformer] {
        &self.conformers
    }

    pub fn n_atoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn n_conformers(&self) -> usize {
        self.conformers.len()
    }

    /// Moves every conformer of `other` onto the end of this record's conformer list.
    ///
    /// The caller is responsible for having established that `other` describes the
    /// same molecule; only the atom counts are verified here.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::AtomCountMismatch`] if any incoming conformer does not
    /// have one position per atom of this record. Nothing is appended in that case.
    pub fn append_conformers(&mut self, other: MoleculeRecord) -> Result<(), MoleculeError> {
        Self::check_conformers(self.atoms.len(), &other.conformers, self.conformers.len())?;
        self.conformers.extend(other.conformers);
        Ok(())
    }

    /// Computes the Hill formula of the molecule (e.g., "C2H6O").
    pub fn hill_formula(&self) -> Result<String, FormulaError> {
        hill_formula(&self.atoms)
    }

    /// Returns the name to use for everything derived from this molecule.
    ///
    /// The declared name is used unless it is empty or whitespace, in which case the
    /// Hill formula stands in for it.
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if the name is empty and no formula can be derived.
    pub fn resolved_name(&self) -> Result<String, FormulaError> {
        let declared = self.name.trim();
        if declared.is_empty() {
            self.hill_formula()
        } else {
            Ok(declared.to_string())
        }
    }

    /// Builds a single-conformer copy of this molecule carrying the given positions.
    ///
    /// Used to hand one geometry (e.g., a minimized conformer) to a structure writer.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::AtomCountMismatch`] if `positions` does not have one
    /// entry per atom.
    pub fn with_single_conformer(
        &self,
        positions: Vec<Point3<f64>>,
    ) -> Result<MoleculeRecord, MoleculeError> {
        MoleculeRecord::new(
            &self.name,
            self.atoms.clone(),
            self.bonds.clone(),
            vec![Conformer::new(positions)],
        )
    }
}
