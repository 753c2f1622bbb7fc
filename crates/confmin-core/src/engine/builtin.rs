use super::traits::{Aligner, MoleculeMatcher};
use crate::core::chemistry::matching::same_topology;
use crate::core::models::molecule::MoleculeRecord;
use crate::core::utils::geometry::{AlignmentError, kabsch_rmsd};
use nalgebra::Point3;
use std::convert::Infallible;

/// Matches records by element sequence, formal charges and bond set.
///
/// See [`same_topology`] for the exact rules. Atom order must agree between records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologyMatcher;

impl MoleculeMatcher for TopologyMatcher {
    type Error = Infallible;

    fn same_molecule(&self, a: &MoleculeRecord, b: &MoleculeRecord) -> Result<bool, Self::Error> {
        Ok(same_topology(a, b))
    }
}

/// RMSD after Kabsch superposition.
#[derive(Debug, Clone, Copy, Default)]
pub struct KabschAligner;

impl Aligner for KabschAligner {
    type Error = AlignmentError;

    fn rmsd(&self, reference: &[Point3<f64>], mobile: &[Point3<f64>]) -> Result<f64, Self::Error> {
        kabsch_rmsd(reference, mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::conformer::Conformer;

    fn helium(name: &str, element: &str) -> MoleculeRecord {
        MoleculeRecord::new(
            name,
            vec![Atom::new(element, "X1")],
            vec![],
            vec![Conformer::new(vec![Point3::origin()])],
        )
        .unwrap()
    }

    #[test]
    fn topology_matcher_compares_structure_not_names() {
        let matcher = TopologyMatcher;
        assert!(matcher
            .same_molecule(&helium("a", "He"), &helium("b", "He"))
            .unwrap());
        assert!(!matcher
            .same_molecule(&helium("same", "He"), &helium("same", "Ne"))
            .unwrap());
    }

    #[test]
    fn kabsch_aligner_reports_alignment_errors() {
        let aligner = KabschAligner;
        let result = aligner.rmsd(&[Point3::origin()], &[]);
        assert_eq!(
            result,
            Err(AlignmentError::LengthMismatch {
                reference: 1,
                mobile: 0
            })
        );
    }

    #[test]
    fn kabsch_aligner_ignores_translation() {
        let aligner = KabschAligner;
        let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let b = vec![Point3::new(5.0, 5.0, 5.0), Point3::new(6.0, 5.0, 5.0)];
        assert!(aligner.rmsd(&a, &b).unwrap() < 1e-9);
    }
}
