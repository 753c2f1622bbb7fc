/// Energies and structural change of one conformer across a minimization.
///
/// Values are kept at full precision; rounding happens only when a row is
/// formatted for display or written to a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRow {
    /// 1-based position of the conformer within its molecule.
    pub conformer_index: usize,
    /// Potential energy of the input geometry, in kcal/mol.
    pub initial_energy: f64,
    /// Potential energy after minimization, in kcal/mol.
    pub minimized_energy: f64,
    /// RMSD between the input and minimized geometries after superposition, in Angstrom.
    pub rmsd: f64,
}

impl EnergyRow {
    /// Energy released by the minimization (initial minus minimized), in kcal/mol.
    pub fn energy_drop(&self) -> f64 {
        self.initial_energy - self.minimized_energy
    }
}
