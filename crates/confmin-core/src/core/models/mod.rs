//! # Core Models Module
//!
//! Data structures describing the molecules that flow through a conformer study.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom identity (element, name, formal charge)
//! - [`topology`] - Bond connectivity between atoms
//! - [`conformer`] - One 3D arrangement of a molecule's atoms
//! - [`molecule`] - A chemical graph together with all of its known conformers
//! - [`energy`] - Per-conformer energy results produced by a minimization report
//!
//! ## Usage
//!
//! ```ignore
//! use confmin::core::models::{atom::Atom, conformer::Conformer, molecule::MoleculeRecord};
//!
//! let atoms = vec![Atom::new("O", "O1"), Atom::new("H", "H1"), Atom::new("H", "H2")];
//! let conformer = Conformer::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.96, 0.0, 0.0),
//!     Point3::new(-0.24, 0.93, 0.0),
//! ]);
//! let water = MoleculeRecord::new("water", atoms, bonds, vec![conformer])?;
//! ```

pub mod atom;
pub mod conformer;
pub mod energy;
pub mod molecule;
pub mod topology;
