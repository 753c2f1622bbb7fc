//! Collaborator interfaces.
//!
//! Each trait stands for a capability provided by an external numerical library.
//! Errors are associated types so backends keep their own error values; workflows
//! pass them through untouched as [`EngineError::External`](super::error::EngineError::External).
//!
//! Units: positions are in Angstrom everywhere. Energies carry their unit in
//! [`PotentialEnergy`].

use crate::core::models::molecule::MoleculeRecord;
use crate::core::utils::units::PotentialEnergy;
use nalgebra::Point3;
use std::error::Error;
use std::path::Path;

/// Loads molecule records from a structure file, typically one record per conformer.
pub trait MoleculeSource {
    type Error: Error + Send + Sync + 'static;

    /// Reads every record in `path`, in file order.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the file cannot be read or parsed.
    fn load(&self, path: &Path) -> Result<Vec<MoleculeRecord>, Self::Error>;
}

/// Decides whether two records describe the same chemical entity.
pub trait MoleculeMatcher {
    type Error: Error + Send + Sync + 'static;

    /// Returns `true` if `a` and `b` are the same molecule. Names must not influence the
    /// answer; equality is structural.
    fn same_molecule(&self, a: &MoleculeRecord, b: &MoleculeRecord) -> Result<bool, Self::Error>;
}

/// A parameterized simulation of one molecule, holding a mutable position state.
pub trait Simulation {
    type Error: Error + Send + Sync + 'static;

    /// Replaces the current positions with `positions` (one per atom, in Angstrom).
    fn set_positions(&mut self, positions: &[Point3<f64>]) -> Result<(), Self::Error>;

    /// Returns the current positions (one per atom, in Angstrom).
    fn positions(&self) -> Result<Vec<Point3<f64>>, Self::Error>;

    /// Evaluates the potential energy of the current positions.
    fn potential_energy(&self) -> Result<PotentialEnergy, Self::Error>;
}

/// Builds a [`Simulation`] for a molecule from a named force field.
pub trait SimulationFactory {
    type Simulation: Simulation;
    type Error: Error + Send + Sync + 'static;

    /// Parameterizes `molecule` with the force field called `force_field`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the force field is unknown or cannot be applied to
    /// the molecule.
    fn build(
        &self,
        molecule: &MoleculeRecord,
        force_field: &str,
    ) -> Result<Self::Simulation, Self::Error>;
}

/// Moves a simulation's positions to a nearby local energy minimum.
///
/// Convergence tolerance and iteration limits are the minimizer's own policy.
pub trait Minimizer<S: Simulation> {
    type Error: Error + Send + Sync + 'static;

    fn minimize(&self, simulation: &mut S) -> Result<(), Self::Error>;
}

/// Measures the structural deviation between two geometries of the same molecule.
pub trait Aligner {
    type Error: Error + Send + Sync + 'static;

    /// RMSD in Angstrom between `reference` and `mobile` after optimal rigid-body alignment.
    fn rmsd(&self, reference: &[Point3<f64>], mobile: &[Point3<f64>]) -> Result<f64, Self::Error>;
}

/// Persists single-conformer structures in a molecular file format.
pub trait StructureWriter {
    type Error: Error + Send + Sync + 'static;

    /// File extension of the written format, without the leading dot (e.g., "sdf").
    fn extension(&self) -> &str;

    /// Writes `molecule` to `path`, replacing any existing file.
    fn write(&self, molecule: &MoleculeRecord, path: &Path) -> Result<(), Self::Error>;
}
