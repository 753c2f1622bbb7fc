use crate::core::models::atom::Atom;
use phf::phf_map;
use std::collections::BTreeMap;
use thiserror::Error;

static ATOMIC_NUMBERS: phf::Map<&'static str, u8> = phf_map! {
    "H" => 1, "He" => 2, "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8,
    "F" => 9, "Ne" => 10, "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15,
    "S" => 16, "Cl" => 17, "Ar" => 18, "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22,
    "V" => 23, "Cr" => 24, "Mn" => 25, "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29,
    "Zn" => 30, "Ga" => 31, "Ge" => 32, "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36,
    "Rb" => 37, "Sr" => 38, "Y" => 39, "Zr" => 40, "Nb" => 41, "Mo" => 42, "Tc" => 43,
    "Ru" => 44, "Rh" => 45, "Pd" => 46, "Ag" => 47, "Cd" => 48, "In" => 49, "Sn" => 50,
    "Sb" => 51, "Te" => 52, "I" => 53, "Xe" => 54, "Cs" => 55, "Ba" => 56, "La" => 57,
    "Ce" => 58, "Pr" => 59, "Nd" => 60, "Pm" => 61, "Sm" => 62, "Eu" => 63, "Gd" => 64,
    "Tb" => 65, "Dy" => 66, "Ho" => 67, "Er" => 68, "Tm" => 69, "Yb" => 70, "Lu" => 71,
    "Hf" => 72, "Ta" => 73, "W" => 74, "Re" => 75, "Os" => 76, "Ir" => 77, "Pt" => 78,
    "Au" => 79, "Hg" => 80, "Tl" => 81, "Pb" => 82, "Bi" => 83, "Po" => 84, "At" => 85,
    "Rn" => 86, "Fr" => 87, "Ra" => 88, "Ac" => 89, "Th" => 90, "Pa" => 91, "U" => 92,
    "Np" => 93, "Pu" => 94, "Am" => 95, "Cm" => 96, "Bk" => 97, "Cf" => 98, "Es" => 99,
    "Fm" => 100, "Md" => 101, "No" => 102, "Lr" => 103, "Rf" => 104, "Db" => 105,
    "Sg" => 106, "Bh" => 107, "Hs" => 108, "Mt" => 109, "Ds" => 110, "Rg" => 111,
    "Cn" => 112, "Nh" => 113, "Fl" => 114, "Mc" => 115, "Lv" => 116, "Ts" => 117,
    "Og" => 118,
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormulaError {
    #[error("Unknown element symbol '{symbol}' on atom {atom_idx}")]
    UnknownElement { atom_idx: usize, symbol: String },
    #[error("Cannot derive a formula for a molecule without atoms")]
    EmptyMolecule,
}

/// Normalizes an element symbol to its canonical capitalization ("CL" -> "Cl", "c" -> "C").
///
/// # Return
///
/// Returns `Some` with the canonical symbol if it names a known element, otherwise `None`.
pub fn normalize_element_symbol(symbol: &str) -> Option<&'static str> {
    let trimmed = symbol.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    let canonical: String = first
        .to_uppercase()
        .chain(chars.flat_map(char::to_lowercase))
        .collect();
    ATOMIC_NUMBERS
        .get_entry(canonical.as_str())
        .map(|(key, _)| *key)
}

/// Looks up the atomic number of an element symbol, accepting any capitalization.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    normalize_element_symbol(symbol).and_then(|s| ATOMIC_NUMBERS.get(s).copied())
}

/// Builds the Hill-system formula of a set of atoms.
///
/// When carbon is present it is listed first, hydrogen second, and all remaining
/// elements follow in alphabetical order. Without carbon every element, hydrogen
/// included, is listed alphabetically. Counts of one are omitted.
///
/// # Arguments
///
/// * `atoms` - The atoms of the molecule.
///
/// # Return
///
/// Returns the formula string (e.g., "C2H6O").
///
/// # Errors
///
/// Returns [`FormulaError::EmptyMolecule`] for an empty atom list and
/// [`FormulaError::UnknownElement`] when an element symbol is not in the periodic table.
pub fn hill_formula(atoms: &[Atom]) -> Result<String, FormulaError> {
    if atoms.is_empty() {
        return Err(FormulaError::EmptyMolecule);
    }

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for (atom_idx, atom) in atoms.iter().enumerate() {
        let symbol =
            normalize_element_symbol(&atom.element).ok_or_else(|| FormulaError::UnknownElement {
                atom_idx,
                symbol: atom.element.clone(),
            })?;
        *counts.entry(symbol).or_insert(0) += 1;
    }

    let mut ordered: Vec<(&str, usize)> = Vec::with_capacity(counts.len());
    if let Some(carbon) = counts.remove("C") {
        ordered.push(("C", carbon));
        if let Some(hydrogen) = counts.remove("H") {
            ordered.push(("H", hydrogen));
        }
    }
    ordered.extend(counts);

    let mut formula = String::new();
    for (symbol, count) in ordered {
        formula.push_str(symbol);
        if count > 1 {
            formula.push_str(&count.to_string());
        }
    }
    Ok(formula)
}
