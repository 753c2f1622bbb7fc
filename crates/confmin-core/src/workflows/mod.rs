//! # Workflows Module
//!
//! High-level entry points that turn a structure file into minimized conformers and
//! energy reports.
//!
//! ## Overview
//!
//! Input files usually list every conformer as its own record. The workflows regroup
//! those records into multi-conformer molecules, minimize each conformer with the
//! injected simulation backend, and write one minimized structure per conformer plus a
//! CSV energy report per molecule.
//!
//! ## Architecture
//!
//! - **Collation** ([`collate`]) - Merges runs of adjacent records that describe the
//!   same molecule
//! - **Energy Report** ([`report`]) - Minimizes every conformer of one molecule and
//!   writes its structures and CSV report
//! - **Batch Driver** ([`batch`]) - Chains loading, collation and reporting for a whole
//!   input file, with phase-level progress reporting

pub mod batch;
pub mod collate;
pub mod report;
