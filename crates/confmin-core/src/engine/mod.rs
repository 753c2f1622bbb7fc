//! # Engine Module
//!
//! The seams between the orchestration logic and the numerical collaborators that do the
//! actual chemistry.
//!
//! ## Overview
//!
//! Loading structure files, parameterizing a molecule with a force field, evaluating
//! potential energies and minimizing geometries are all performed by external
//! libraries. The engine describes each of them as a trait so that workflows can be
//! driven by any backend and tested with deterministic fakes.
//!
//! ## Architecture
//!
//! - **Collaborator Traits** ([`traits`]) - `MoleculeSource`, `MoleculeMatcher`,
//!   `SimulationFactory`, `Simulation`, `Minimizer`, `Aligner`, `StructureWriter`
//! - **Built-in Collaborators** ([`builtin`]) - Topology matching and Kabsch alignment
//! - **Scoped Evaluation** ([`evaluation`]) - Load, evaluate, minimize and read back one
//!   conformer as a single bounded step
//! - **Configuration** ([`config`]) - Output directory and force field selection
//! - **Context** ([`context`]) - Bundles the collaborators used while reporting
//! - **Progress Monitoring** ([`progress`]) - Progress callbacks for front-ends
//! - **Error Handling** ([`error`]) - The error type shared by all workflows

pub mod builtin;
pub mod config;
pub mod context;
pub mod error;
pub mod evaluation;
pub mod progress;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
