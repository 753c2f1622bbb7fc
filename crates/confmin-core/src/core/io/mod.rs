//! Output side of a conformer study.
//!
//! Reading and writing molecular structure formats is delegated to the
//! [`MoleculeSource`](crate::engine::traits::MoleculeSource) and
//! [`StructureWriter`](crate::engine::traits::StructureWriter) collaborators. This module
//! owns what the library itself persists: deterministic output paths and the CSV
//! energy report.

pub mod naming;
pub mod report;
