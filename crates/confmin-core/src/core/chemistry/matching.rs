use crate::core::models::molecule::MoleculeRecord;
use crate::core::models::topology::Bond;
use std::collections::HashSet;

use super::formula::normalize_element_symbol;

/// Decides whether two records describe the same chemical graph.
///
/// The comparison is index-based: both records must list the same elements with the
/// same formal charges in the same order, and carry the same set of bonds (direction
/// of a bond is ignored, bond order is not). Names and coordinates play no part.
///
/// This is a strict test. Two records of one molecule whose atoms were written in a
/// different order do not match; conformers exported from a single molecule always
/// share their atom order, which is the case this test is built for.
pub fn same_topology(a: &MoleculeRecord, b: &MoleculeRecord) -> bool {
    if a.n_atoms() != b.n_atoms() || a.bonds().len() != b.bonds().len() {
        return false;
    }

    let atoms_match = a.atoms().iter().zip(b.atoms()).all(|(x, y)| {
        x.formal_charge == y.formal_charge
            && match (
                normalize_element_symbol(&x.element),
                normalize_element_symbol(&y.element),
            ) {
                (Some(ex), Some(ey)) => ex == ey,
                _ => x.element == y.element,
            }
    });
    if !atoms_match {
        return false;
    }

    canonical_bonds(a.bonds()) == canonical_bonds(b.bonds())
}

fn canonical_bonds(bonds: &[Bond]) -> HashSet<Bond> {
    bonds.iter().map(Bond::canonical).collect()
}
