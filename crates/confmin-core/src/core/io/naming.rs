use std::path::{Path, PathBuf};

/// Path of the minimized structure file for one conformer:
/// `<dir>/<molecule>_conf<index>_minimized.<extension>`.
///
/// `conformer_index` is 1-based. A leading dot on `extension` is ignored.
pub fn minimized_structure_path(
    dir: &Path,
    molecule_name: &str,
    conformer_index: usize,
    extension: &str,
) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    dir.join(format!(
        "{}_conf{}_minimized.{}",
        molecule_name, conformer_index, extension
    ))
}

/// Path of the CSV energy report of a molecule: `<dir>/<molecule>.csv`.
pub fn report_path(dir: &Path, molecule_name: &str) -> PathBuf {
    dir.join(format!("{}.csv", molecule_name))
}
