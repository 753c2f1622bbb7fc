use std::fmt;

pub const KJ_PER_KCAL: f64 = 4.184;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyUnit {
    KilojoulePerMole,
    KilocaloriePerMole,
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KilojoulePerMole => write!(f, "kJ/mol"),
            Self::KilocaloriePerMole => write!(f, "kcal/mol"),
        }
    }
}

/// A potential energy tagged with the unit it was reported in.
///
/// Simulation backends report energies in their native unit; consumers convert
/// explicitly with [`PotentialEnergy::to_kcal_per_mol`] or
/// [`PotentialEnergy::to_kj_per_mol`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialEnergy {
    value: f64,
    unit: EnergyUnit,
}

impl PotentialEnergy {
    pub fn new(value: f64, unit: EnergyUnit) -> Self {
        Self { value, unit }
    }

    pub fn kcal_per_mol(value: f64) -> Self {
        Self::new(value, EnergyUnit::KilocaloriePerMole)
    }

    pub fn kj_per_mol(value: f64) -> Self {
        Self::new(value, EnergyUnit::KilojoulePerMole)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> EnergyUnit {
        self.unit
    }

    pub fn to_kcal_per_mol(&self) -> f64 {
        match self.unit {
            EnergyUnit::KilocaloriePerMole => self.value,
            EnergyUnit::KilojoulePerMole => self.value / KJ_PER_KCAL,
        }
    }

    pub fn to_kj_per_mol(&self) -> f64 {
        match self.unit {
            EnergyUnit::KilojoulePerMole => self.value,
            EnergyUnit::KilocaloriePerMole => self.value * KJ_PER_KCAL,
        }
    }
}

impl fmt::Display for PotentialEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
