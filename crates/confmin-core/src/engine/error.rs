use super::config::ConfigError;
use crate::core::chemistry::formula::FormulaError;
use crate::core::models::molecule::MoleculeError;
use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A failure raised by an injected collaborator, passed through unchanged.
    #[error(transparent)]
    External(BoxError),

    #[error("Molecule '{molecule}' has no conformers to report")]
    NoConformers { molecule: String },

    #[error("Simulation returned {found} positions for a molecule with {expected} atoms")]
    PositionCountMismatch { expected: usize, found: usize },

    #[error("Invalid molecule record: {0}")]
    Molecule(#[from] MoleculeError),

    #[error("Cannot derive a molecule name: {0}")]
    Naming(#[from] FormulaError),

    #[error("Failed to write report '{path}': {source}", path = path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn external<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::External(Box::new(error))
    }
}
