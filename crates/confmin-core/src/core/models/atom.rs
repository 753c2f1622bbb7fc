/// Represents one atom of a molecular graph.
///
/// An atom carries only identity information. Its position lives in the
/// [`Conformer`](super::conformer::Conformer)s of the parent molecule, so that
/// every conformer of a molecule shares a single atom list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    /// The element symbol (e.g., "C", "Cl").
    pub element: String,
    /// The atom name as given by the source file (e.g., "C1", "HO2"). May be empty.
    pub name: String,
    /// The formal charge in elementary charge units.
    pub formal_charge: i8,
}

impl Atom {
    /// Creates a new neutral `Atom`.
    ///
    /// # Arguments
    ///
    /// * `element` - The element symbol of the atom.
    /// * `name` - The name of the atom.
    pub fn new(element: &str, name: &str) -> Self {
        Self {
            element: element.to_string(),
            name: name.to_string(),
            formal_charge: 0,
        }
    }

    /// Returns a copy of this atom with the given formal charge.
    pub fn with_formal_charge(mut self, formal_charge: i8) -> Self {
        self.formal_charge = formal_charge;
        self
    }
}
