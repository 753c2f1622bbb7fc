//! # Core Module
//!
//! Fundamental building blocks for conformer energy studies.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, conformers and multi-conformer records
//! - **Chemistry** ([`chemistry`]) - Hill formulas and structural equality of molecules
//! - **File I/O** ([`io`]) - Output path naming and the CSV energy report
//! - **Utilities** ([`utils`]) - Geometry (RMSD, Kabsch superposition) and energy units

pub mod chemistry;
pub mod io;
pub mod models;
pub mod utils;
