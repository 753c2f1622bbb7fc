use crate::core::io::naming::{minimized_structure_path, report_path};
use crate::core::io::report::{format_row, write_report_to_path};
use crate::core::models::energy::EnergyRow;
use crate::core::models::molecule::MoleculeRecord;
use crate::engine::context::ReportContext;
use crate::engine::error::EngineError;
use crate::engine::evaluation::evaluate_conformer;
use crate::engine::progress::Progress;
use crate::engine::traits::{Aligner, Minimizer, Simulation, StructureWriter};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Everything produced for one molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeReport {
    /// Name used for every output of the molecule (declared name or Hill formula).
    pub molecule_name: String,
    /// One row per conformer, in conformer order.
    pub rows: Vec<EnergyRow>,
    /// Minimized structure files, in conformer order.
    pub structure_paths: Vec<PathBuf>,
    pub report_path: PathBuf,
}

/// Minimizes every conformer of `molecule` and writes its structures and CSV report.
///
/// Conformers are processed sequentially. For each one the simulation is loaded with
/// the conformer's coordinates, its energy is evaluated before and after minimization,
/// the RMSD between the input and minimized geometries is measured, and the minimized
/// geometry is written to `<output-dir>/<name>_conf<i>_minimized.<ext>`. Once every
/// conformer is done the rows are written to `<output-dir>/<name>.csv`.
///
/// # Arguments
///
/// * `molecule` - The molecule and all of its conformers.
/// * `simulation` - A simulation built for `molecule`. It is borrowed mutably for the
///   whole call and left in the state of the last conformer.
/// * `context` - Minimizer, aligner, writer, run configuration and progress reporter.
///
/// # Return
///
/// The rows at full precision, together with the paths of all written files.
///
/// # Errors
///
/// Stops at the first failure. Collaborator errors are returned as
/// [`EngineError::External`] with their message unchanged. Returns
/// [`EngineError::NoConformers`] for a molecule without conformers,
/// [`EngineError::Naming`] if the name must fall back to a formula that cannot be
/// derived, and [`EngineError::Report`] if the CSV report cannot be written.
#[instrument(skip_all, name = "energy_report", fields(molecule = molecule.name(), conformers = molecule.n_conformers()))]
pub fn generate_report<S, M, A, W>(
    molecule: &MoleculeRecord,
    simulation: &mut S,
    context: &ReportContext<'_, M, A, W>,
) -> Result<MoleculeReport, EngineError>
where
    S: Simulation,
    M: Minimizer<S>,
    A: Aligner,
    W: StructureWriter,
{
    let molecule_name = molecule.resolved_name()?;
    let total = molecule.n_conformers();
    if total == 0 {
        return Err(EngineError::NoConformers {
            molecule: molecule_name,
        });
    }
    debug!(name = %molecule_name, "Resolved output name for molecule.");

    let output_dir = &context.config.output_dir;
    let mut rows = Vec::with_capacity(total);
    let mut structure_paths = Vec::with_capacity(total);

    for (idx, conformer) in molecule.conformers().iter().enumerate() {
        let conformer_index = idx + 1;
        let outcome = evaluate_conformer(simulation, context.minimizer, conformer.positions())?;

        let rmsd = context
            .aligner
            .rmsd(conformer.positions(), &outcome.minimized_positions)
            .map_err(EngineError::external)?;

        let mut minimized = molecule.with_single_conformer(outcome.minimized_positions)?;
        minimized.set_name(&molecule_name);
        let path = minimized_structure_path(
            output_dir,
            &molecule_name,
            conformer_index,
            context.writer.extension(),
        );
        context
            .writer
            .write(&minimized, &path)
            .map_err(EngineError::external)?;

        let row = EnergyRow {
            conformer_index,
            initial_energy: outcome.initial_energy.to_kcal_per_mol(),
            minimized_energy: outcome.minimized_energy.to_kcal_per_mol(),
            rmsd,
        };
        let line = progress_line(&row, total);
        info!(
            conformer = conformer_index,
            initial_energy = row.initial_energy,
            minimized_energy = row.minimized_energy,
            rmsd = row.rmsd,
            "{}",
            line
        );
        context.reporter.report(Progress::Message(line));
        context.reporter.report(Progress::ConformerFinished {
            molecule: molecule_name.clone(),
            total_conformers: total,
            row,
        });

        rows.push(row);
        structure_paths.push(path);
    }

    let csv_path = report_path(output_dir, &molecule_name);
    write_report_to_path(&rows, &csv_path).map_err(|source| EngineError::Report {
        path: csv_path.clone(),
        source,
    })?;
    info!(report = %csv_path.display(), conformers = total, "Wrote energy report.");

    Ok(MoleculeReport {
        molecule_name,
        rows,
        structure_paths,
        report_path: csv_path,
    })
}

fn progress_line(row: &EnergyRow, total: usize) -> String {
    let [_, initial, minimized, rmsd] = format_row(row);
    format!(
        "Conformer {}/{}: initial {} kcal/mol, minimized {} kcal/mol, RMSD {} Angstrom",
        row.conformer_index, total, initial, minimized, rmsd
    )
}
