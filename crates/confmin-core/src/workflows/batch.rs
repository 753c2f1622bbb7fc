use super::collate::collate_conformers;
use super::report::{MoleculeReport, generate_report};
use crate::core::models::molecule::MoleculeRecord;
use crate::engine::context::ReportContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use crate::engine::traits::{
    Aligner, MoleculeMatcher, MoleculeSource, Minimizer, SimulationFactory, StructureWriter,
};
use std::path::Path;
use tracing::{info, instrument};

/// Collates `records` into molecules and produces an energy report for each of them.
///
/// Molecules are handled one at a time, in collation order. Each gets its own
/// simulation, built by `factory` with the configured force field. The output
/// directory is created first if it does not exist.
///
/// # Errors
///
/// Stops at the first failing molecule; reports already written stay on disk.
/// See [`collate_conformers`] and [`generate_report`] for the individual failure
/// modes. Failing to create the output directory yields [`EngineError::Io`].
#[instrument(skip_all, name = "batch_workflow", fields(records = records.len()))]
pub fn run_batch<F, Mt, M, A, W>(
    records: Vec<MoleculeRecord>,
    factory: &F,
    matcher: &Mt,
    context: &ReportContext<'_, M, A, W>,
) -> Result<Vec<MoleculeReport>, EngineError>
where
    F: SimulationFactory,
    Mt: MoleculeMatcher,
    M: Minimizer<F::Simulation>,
    A: Aligner,
    W: StructureWriter,
{
    let reporter = context.reporter;

    // === Phase 1: Collation ===
    reporter.report(Progress::PhaseStart { name: "Collation" });
    let molecules = collate_conformers(records, matcher)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Minimization and reporting ===
    reporter.report(Progress::PhaseStart {
        name: "Minimization",
    });
    std::fs::create_dir_all(&context.config.output_dir)?;

    reporter.report(Progress::TaskStart {
        total_steps: molecules.len() as u64,
    });
    let mut reports = Vec::with_capacity(molecules.len());
    for molecule in &molecules {
        info!(
            molecule = molecule.name(),
            conformers = molecule.n_conformers(),
            force_field = %context.config.force_field,
            "Building simulation for molecule."
        );
        let mut simulation = factory
            .build(molecule, &context.config.force_field)
            .map_err(EngineError::external)?;
        reports.push(generate_report(molecule, &mut simulation, context)?);
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        molecules = reports.len(),
        conformers = reports.iter().map(|r| r.rows.len()).sum::<usize>(),
        "Batch complete."
    );
    Ok(reports)
}

/// Loads all records from `path` with `source`, then runs [`run_batch`] on them.
///
/// # Errors
///
/// Loader failures are returned as [`EngineError::External`]; everything else as in
/// [`run_batch`].
#[instrument(skip_all, name = "file_workflow", fields(path = %path.display()))]
pub fn run_from_path<Src, F, Mt, M, A, W>(
    path: &Path,
    source: &Src,
    factory: &F,
    matcher: &Mt,
    context: &ReportContext<'_, M, A, W>,
) -> Result<Vec<MoleculeReport>, EngineError>
where
    Src: MoleculeSource,
    F: SimulationFactory,
    Mt: MoleculeMatcher,
    M: Minimizer<F::Simulation>,
    A: Aligner,
    W: StructureWriter,
{
    context
        .reporter
        .report(Progress::PhaseStart { name: "Loading" });
    let records = source.load(path).map_err(EngineError::external)?;
    info!(records = records.len(), "Loaded input records.");
    context.reporter.report(Progress::PhaseFinish);

    run_batch(records, factory, matcher, context)
}
