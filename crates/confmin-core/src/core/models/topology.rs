use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
    Aromatic = 4,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized bond order")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Numeric codes follow the MDL molfile bond block.
        let order = match s.trim().to_ascii_lowercase().as_str() {
            "single" | "s" | "1" => Self::Single,
            "double" | "d" | "2" => Self::Double,
            "triple" | "t" | "3" => Self::Triple,
            "aromatic" | "ar" | "4" => Self::Aromatic,
            _ => return Err(ParseBondOrderError),
        };
        Ok(order)
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Triple => "Triple",
            Self::Aromatic => "Aromatic",
        };
        f.write_str(label)
    }
}

/// A bond between two atoms, addressed by their index in the parent molecule's atom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_idx: usize,
    pub atom2_idx: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(atom1_idx: usize, atom2_idx: usize, order: BondOrder) -> Self {
        Self {
            atom1_idx,
            atom2_idx,
            order,
        }
    }

    /// Returns the bond with its atom indices in ascending order, so that `a-b` and `b-a`
    /// compare equal.
    pub fn canonical(&self) -> Self {
        Self {
            atom1_idx: self.atom1_idx.min(self.atom2_idx),
            atom2_idx: self.atom1_idx.max(self.atom2_idx),
            order: self.order,
        }
    }
}
