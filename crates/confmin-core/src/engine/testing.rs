//! Deterministic stand-ins for the collaborator traits.

use super::traits::{
    Aligner, MoleculeMatcher, MoleculeSource, Minimizer, Simulation, SimulationFactory,
    StructureWriter,
};
use crate::core::models::atom::Atom;
use crate::core::models::conformer::Conformer;
use crate::core::models::molecule::MoleculeRecord;
use crate::core::models::topology::{Bond, BondOrder};
use crate::core::utils::geometry::centroid;
use crate::core::utils::units::{EnergyUnit, PotentialEnergy};
use nalgebra::Point3;
use std::cell::RefCell;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct FakeError(pub String);

impl FakeError {
    fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    SetPositions,
    PotentialEnergy,
    Minimize,
    Positions,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailAt {
    #[default]
    Never,
    SetPositions,
    PotentialEnergy,
    /// `positions` returns one position fewer than it holds.
    DropPosition,
}

/// Energy is the sum of squared distances from the centroid, reported in `unit`.
pub struct FakeSimulation {
    positions: Vec<Point3<f64>>,
    unit: EnergyUnit,
    log: CallLog,
    fail_at: FailAt,
}

impl FakeSimulation {
    pub fn new(unit: EnergyUnit) -> Self {
        Self::with_log(unit, CallLog::default())
    }

    pub fn with_log(unit: EnergyUnit, log: CallLog) -> Self {
        Self {
            positions: Vec::new(),
            unit,
            log,
            fail_at: FailAt::Never,
        }
    }

    pub fn fail_at(mut self, fail_at: FailAt) -> Self {
        self.fail_at = fail_at;
        self
    }

    pub fn call_log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl Simulation for FakeSimulation {
    type Error = FakeError;

    fn set_positions(&mut self, positions: &[Point3<f64>]) -> Result<(), Self::Error> {
        self.record(Call::SetPositions);
        if self.fail_at == FailAt::SetPositions {
            return Err(FakeError::new("positions rejected"));
        }
        self.positions = positions.to_vec();
        Ok(())
    }

    fn positions(&self) -> Result<Vec<Point3<f64>>, Self::Error> {
        self.record(Call::Positions);
        let mut positions = self.positions.clone();
        if self.fail_at == FailAt::DropPosition {
            positions.pop();
        }
        Ok(positions)
    }

    fn potential_energy(&self) -> Result<PotentialEnergy, Self::Error> {
        self.record(Call::PotentialEnergy);
        if self.fail_at == FailAt::PotentialEnergy {
            return Err(FakeError::new("energy evaluation failed"));
        }
        let value = match centroid(&self.positions) {
            Some(c) => self.positions.iter().map(|p| (p - c).norm_squared()).sum(),
            None => 0.0,
        };
        Ok(PotentialEnergy::new(value, self.unit))
    }
}

/// Contracts every position halfway towards the centroid.
#[derive(Debug, Default)]
pub struct FakeMinimizer {
    fail: bool,
}

impl FakeMinimizer {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Minimizer<FakeSimulation> for FakeMinimizer {
    type Error = FakeError;

    fn minimize(&self, simulation: &mut FakeSimulation) -> Result<(), Self::Error> {
        simulation.record(Call::Minimize);
        if self.fail {
            return Err(FakeError::new("minimizer diverged"));
        }
        if let Some(c) = centroid(&simulation.positions) {
            for p in simulation.positions.iter_mut() {
                *p = c + (*p - c) * 0.5;
            }
        }
        Ok(())
    }
}

/// Builds [`FakeSimulation`]s sharing one call log, remembering every request.
pub struct FakeFactory {
    unit: EnergyUnit,
    log: CallLog,
    unknown_force_field: Option<String>,
    pub requests: RefCell<Vec<(String, String, usize)>>,
}

impl FakeFactory {
    pub fn new(unit: EnergyUnit) -> Self {
        Self {
            unit,
            log: CallLog::default(),
            unknown_force_field: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Makes `build` fail whenever `force_field` is requested.
    pub fn rejecting(mut self, force_field: &str) -> Self {
        self.unknown_force_field = Some(force_field.to_string());
        self
    }

    pub fn call_log(&self) -> CallLog {
        Rc::clone(&self.log)
    }
}

impl SimulationFactory for FakeFactory {
    type Simulation = FakeSimulation;
    type Error = FakeError;

    fn build(
        &self,
        molecule: &MoleculeRecord,
        force_field: &str,
    ) -> Result<Self::Simulation, Self::Error> {
        self.requests.borrow_mut().push((
            molecule.name().to_string(),
            force_field.to_string(),
            molecule.n_conformers(),
        ));
        if self.unknown_force_field.as_deref() == Some(force_field) {
            return Err(FakeError(format!("unknown force field '{}'", force_field)));
        }
        Ok(FakeSimulation::with_log(self.unit, Rc::clone(&self.log)))
    }
}

pub struct FakeSource {
    records: Vec<MoleculeRecord>,
    fail: bool,
    pub loaded: RefCell<Vec<PathBuf>>,
}

impl FakeSource {
    pub fn new(records: Vec<MoleculeRecord>) -> Self {
        Self {
            records,
            fail: false,
            loaded: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }
}

impl MoleculeSource for FakeSource {
    type Error = FakeError;

    fn load(&self, path: &Path) -> Result<Vec<MoleculeRecord>, Self::Error> {
        self.loaded.borrow_mut().push(path.to_path_buf());
        if self.fail {
            return Err(FakeError(format!("cannot parse '{}'", path.display())));
        }
        Ok(self.records.clone())
    }
}

/// Compares declared names only. Useful to force merges the topology would refuse.
#[derive(Default)]
pub struct NameMatcher {
    fail: bool,
}

impl NameMatcher {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl MoleculeMatcher for NameMatcher {
    type Error = FakeError;

    fn same_molecule(&self, a: &MoleculeRecord, b: &MoleculeRecord) -> Result<bool, Self::Error> {
        if self.fail {
            return Err(FakeError::new("matcher unavailable"));
        }
        Ok(a.name() == b.name())
    }
}

pub struct FailingAligner;

impl Aligner for FailingAligner {
    type Error = FakeError;

    fn rmsd(&self, _: &[Point3<f64>], _: &[Point3<f64>]) -> Result<f64, Self::Error> {
        Err(FakeError::new("alignment failed"))
    }
}

/// Writes a plain-text XYZ file and records the name each molecule carried.
#[derive(Default)]
pub struct FakeWriter {
    fail: bool,
    pub written: RefCell<Vec<(PathBuf, String)>>,
}

impl FakeWriter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl StructureWriter for FakeWriter {
    type Error = FakeError;

    fn extension(&self) -> &str {
        "xyz"
    }

    fn write(&self, molecule: &MoleculeRecord, path: &Path) -> Result<(), Self::Error> {
        if self.fail {
            return Err(FakeError::new("disk full"));
        }
        let mut text = format!("{}\n{}\n", molecule.n_atoms(), molecule.name());
        if let Some(conformer) = molecule.conformers().first() {
            for (atom, p) in molecule.atoms().iter().zip(conformer.positions()) {
                let _ = writeln!(text, "{} {:.6} {:.6} {:.6}", atom.element, p.x, p.y, p.z);
            }
        }
        std::fs::write(path, text).map_err(|e| FakeError(e.to_string()))?;
        self.written
            .borrow_mut()
            .push((path.to_path_buf(), molecule.name().to_string()));
        Ok(())
    }
}

/// A bent three-atom molecule (`center` bonded to two `ligand`s), one conformer per shift.
///
/// Each shift stretches the second bond so conformers differ in shape, not only in place.
pub fn bent_triatomic(name: &str, center: &str, ligand: &str, shifts: &[f64]) -> MoleculeRecord {
    let atoms = vec![
        Atom::new(center, &format!("{}1", center)),
        Atom::new(ligand, &format!("{}1", ligand)),
        Atom::new(ligand, &format!("{}2", ligand)),
    ];
    let bonds = vec![
        Bond::new(0, 1, BondOrder::Single),
        Bond::new(0, 2, BondOrder::Single),
    ];
    let conformers = shifts
        .iter()
        .map(|&s| {
            Conformer::new(vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.96, 0.0, 0.0),
                Point3::new(-0.24, 0.93 + s, 0.0),
            ])
        })
        .collect();
    MoleculeRecord::new(name, atoms, bonds, conformers)
        .unwrap_or_else(|e| panic!("invalid test molecule: {}", e))
}
