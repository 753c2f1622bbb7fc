use nalgebra::Point3;

/// One spatial arrangement of a molecule's atoms.
///
/// Positions are stored in Angstrom, one per atom, in the atom order of the
/// parent [`MoleculeRecord`](super::molecule::MoleculeRecord).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conformer {
    positions: Vec<Point3<f64>>,
}

impl Conformer {
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Point3<f64>> {
        self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl From<Vec<Point3<f64>>> for Conformer {
    fn from(positions: Vec<Point3<f64>>) -> Self {
        Self::new(positions)
    }
}
