//! Chemistry helpers that operate on the molecular graph only, never on coordinates.
//!
//! - [`formula`] - Hill-system molecular formulas and element symbol lookup
//! - [`matching`] - Structural equality between molecule records

pub mod formula;
pub mod matching;
