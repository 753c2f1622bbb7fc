//! # confmin Core Library
//!
//! Orchestrates conformer energy studies: multi-conformer molecules are collated from
//! single-conformer records, every conformer is minimized with a force-field backed
//! simulation, and the energies before and after minimization are reported together
//! with the structural deviation the minimization introduced.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MoleculeRecord`, `Conformer`),
//!   chemistry helpers (Hill formulas, topology matching), geometry (Kabsch RMSD) and
//!   report I/O.
//!
//! - **[`engine`]: The Seams.** The collaborator traits through which file loading,
//!   force-field parameterization, energy evaluation and minimization are injected,
//!   together with run configuration, progress reporting and the error type.
//!
//! - **[`workflows`]: The Public API.** Conformer collation, per-molecule energy reports
//!   and the batch driver that chains them for a whole input file.

pub mod core;
pub mod engine;
pub mod workflows;
