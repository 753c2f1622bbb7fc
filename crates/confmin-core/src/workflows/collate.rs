use crate::core::models::molecule::MoleculeRecord;
use crate::engine::error::EngineError;
use crate::engine::traits::MoleculeMatcher;
use tracing::{debug, info, instrument};

/// Groups single-conformer records into multi-conformer molecules.
///
/// Records are scanned in order. A record that matches the most recently emitted
/// molecule has its conformers appended to it; any other record starts a new molecule.
/// Only adjacent records are merged, so `[A, B, A]` yields three molecules. Input order
/// is preserved both across and within molecules, and no conformer is dropped.
///
/// # Arguments
///
/// * `records` - The records as loaded from the input file.
/// * `matcher` - Decides whether two records describe the same molecule.
///
/// # Errors
///
/// Returns [`EngineError::External`] if the matcher fails, or
/// [`EngineError::Molecule`] if a matched record's conformers do not fit the molecule
/// they are merged into.
#[instrument(skip_all, name = "collate_conformers", fields(records = records.len()))]
pub fn collate_conformers<Mt>(
    records: Vec<MoleculeRecord>,
    matcher: &Mt,
) -> Result<Vec<MoleculeRecord>, EngineError>
where
    Mt: MoleculeMatcher,
{
    let n_records = records.len();
    let mut molecules: Vec<MoleculeRecord> = Vec::new();

    for (record_idx, record) in records.into_iter().enumerate() {
        let n_molecules = molecules.len();
        if let Some(current) = molecules.last_mut() {
            if matcher
                .same_molecule(current, &record)
                .map_err(EngineError::external)?
            {
                debug!(
                    record = record_idx,
                    molecule = n_molecules - 1,
                    "Record matches previous molecule; appending its conformers."
                );
                current.append_conformers(record)?;
                continue;
            }
        }
        molecules.push(record);
    }

    info!(
        records = n_records,
        molecules = molecules.len(),
        "Collated input records into molecules."
    );
    Ok(molecules)
}
