use super::error::EngineError;
use super::traits::{Minimizer, Simulation};
use crate::core::utils::units::PotentialEnergy;
use nalgebra::Point3;
use tracing::trace;

/// What one conformer looked like before and after minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizationOutcome {
    pub initial_energy: PotentialEnergy,
    pub minimized_energy: PotentialEnergy,
    pub minimized_positions: Vec<Point3<f64>>,
}

/// Loads `positions` into the simulation, minimizes, and reads the result back.
///
/// The simulation is borrowed mutably only for the duration of this call, so the
/// state it is left in cannot leak into other code. Calls happen in a fixed order:
/// set positions, initial energy, minimize, minimized energy, positions.
///
/// # Errors
///
/// Collaborator failures are returned as [`EngineError::External`].
/// [`EngineError::PositionCountMismatch`] is returned if the simulation hands back a
/// different number of positions than it was given.
pub fn evaluate_conformer<S, M>(
    simulation: &mut S,
    minimizer: &M,
    positions: &[Point3<f64>],
) -> Result<MinimizationOutcome, EngineError>
where
    S: Simulation,
    M: Minimizer<S>,
{
    simulation
        .set_positions(positions)
        .map_err(EngineError::external)?;
    let initial_energy = simulation
        .potential_energy()
        .map_err(EngineError::external)?;
    trace!(energy = %initial_energy, "Evaluated initial conformer energy.");

    minimizer
        .minimize(simulation)
        .map_err(EngineError::external)?;

    let minimized_energy = simulation
        .potential_energy()
        .map_err(EngineError::external)?;
    let minimized_positions = simulation.positions().map_err(EngineError::external)?;
    trace!(energy = %minimized_energy, "Evaluated minimized conformer energy.");

    if minimized_positions.len() != positions.len() {
        return Err(EngineError::PositionCountMismatch {
            expected: positions.len(),
            found: minimized_positions.len(),
        });
    }

    Ok(MinimizationOutcome {
        initial_energy,
        minimized_energy,
        minimized_positions,
    })
}
