//! Validación de `MoleculeRequest` antes de cruzar la frontera nativa.
//!
//! Orden de comprobación (falla en el primer error):
//! 1. extremos de cada enlace;
//! 2. referencias de cada elemento estereo;
//! 3. número de átomos y de elementos estereo frente al ancho de `AT_NUM`,
//!    salvo en modo `LargeMolecules`;
//! 4. hidrógenos implícitos no negativos (y dentro de un byte con signo);
//! 5. masa isotópica representable en `AT_NUM`;
//! 6. resto de campos de ancho fijo (símbolo, carga, radicales) y las
//!    referencias de los bloques de polímero y V3000.
//!
//! El modo de moléculas grandes sólo cambia el paso 3. No quita el límite
//! físico: `AT_NUM` sigue siendo de 16 bits y `NativeInput::marshal` rechaza
//! más de 32767 átomos o elementos estereo con `StructureTooLarge`.

use inchi_core::constants::MAX_STANDARD_ATOMS;
use inchi_core::Options;

use crate::atom::{Atom, IsotopicMass};
use crate::error::{RecordKind, ValidationError};
use crate::extensions::{PolymerUnit, V3000Extension};
use crate::request::MoleculeRequest;

/// Longitud máxima del símbolo de elemento (el campo nativo es `char[6]`).
pub const MAX_ELEMENT_LEN: usize = 5;

/// Valida según las opciones; `LargeMolecules` omite el paso 3, pero el
/// marshaling conserva el tope de `AT_NUM` (32767).
pub fn validate(request: &MoleculeRequest, options: &Options) -> Result<(), ValidationError> {
    validate_with(request, options.large_molecules())
}

/// Como `validate`, con el modo de moléculas grandes explícito. Con
/// `large_molecules` el conteo no se limita aquí; el tope de 16 bits se
/// aplica después, al copiar a las estructuras nativas.
pub fn validate_with(request: &MoleculeRequest, large_molecules: bool) -> Result<(), ValidationError> {
    let atom_count = request.atom_count();
    let check_atom = |record: RecordKind, index: usize, atom: usize| {
        if atom < atom_count {
            Ok(())
        } else {
            Err(ValidationError::DanglingReference { record, index, atom, atom_count })
        }
    };

    for (i, bond) in request.bonds().iter().enumerate() {
        check_atom(RecordKind::Bond, i, bond.start)?;
        check_atom(RecordKind::Bond, i, bond.end)?;
    }

    for (i, stereo) in request.stereo().iter().enumerate() {
        for atom in stereo.referenced_atoms() {
            check_atom(RecordKind::Stereo, i, atom)?;
        }
    }

    if !large_molecules {
        if atom_count > MAX_STANDARD_ATOMS {
            return Err(ValidationError::StructureTooLarge { record: RecordKind::Atom,
                                                            count: atom_count,
                                                            limit: MAX_STANDARD_ATOMS });
        }
        if request.stereo().len() > MAX_STANDARD_ATOMS {
            return Err(ValidationError::StructureTooLarge { record: RecordKind::Stereo,
                                                            count: request.stereo().len(),
                                                            limit: MAX_STANDARD_ATOMS });
        }
    }

    for (i, atom) in request.atoms().iter().enumerate() {
        if let Some(h) = atom.implicit_hydrogens {
            if !(0..=i32::from(i8::MAX)).contains(&h) {
                return Err(ValidationError::out_of_range(RecordKind::Atom, i, "implicit_hydrogens", h));
            }
        }
    }

    for (i, atom) in request.atoms().iter().enumerate() {
        if let Some(mass) = atom.isotopic_mass {
            check_isotopic_mass(i, mass)?;
        }
    }

    for (i, atom) in request.atoms().iter().enumerate() {
        check_fixed_width_fields(i, atom)?;
    }

    if let Some(polymer) = request.polymer() {
        for (i, unit) in polymer.units.iter().enumerate() {
            check_polymer_unit(i, unit, &check_atom)?;
        }
    }

    if let Some(v3000) = request.v3000() {
        check_v3000(v3000, &check_atom)?;
    }

    Ok(())
}

fn check_isotopic_mass(index: usize, mass: IsotopicMass) -> Result<(), ValidationError> {
    let in_range = match mass {
        IsotopicMass::Absolute(m) => m > 0 && m < IsotopicMass::ISOTOPIC_SHIFT_FLAG - IsotopicMass::ISOTOPIC_SHIFT_MAX,
        IsotopicMass::Shift(delta) => delta.abs() <= IsotopicMass::ISOTOPIC_SHIFT_MAX,
    };
    if in_range && i16::try_from(mass.raw()).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(RecordKind::Atom, index, "isotopic_mass", mass.raw()))
    }
}

fn check_fixed_width_fields(index: usize, atom: &Atom) -> Result<(), ValidationError> {
    let symbol = &atom.element;
    if symbol.is_empty() || symbol.len() > MAX_ELEMENT_LEN || !symbol.is_ascii() || symbol.contains('\0') {
        return Err(ValidationError::out_of_range(RecordKind::Atom, index, "element", format!("{symbol:?}")));
    }
    if i8::try_from(atom.charge).is_err() {
        return Err(ValidationError::out_of_range(RecordKind::Atom, index, "charge", atom.charge));
    }
    for count in atom.isotopic_hydrogens {
        if !(0..=i32::from(i8::MAX)).contains(&count) {
            return Err(ValidationError::out_of_range(RecordKind::Atom, index, "isotopic_hydrogens", count));
        }
    }
    if let Some([x, y, z]) = atom.coordinates {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(ValidationError::out_of_range(RecordKind::Atom, index, "coordinates", format!("[{x}, {y}, {z}]")));
        }
    }
    Ok(())
}

fn check_polymer_unit<F>(index: usize, unit: &PolymerUnit, check_atom: &F) -> Result<(), ValidationError>
    where F: Fn(RecordKind, usize, usize) -> Result<(), ValidationError>
{
    for &atom in &unit.atoms {
        check_atom(RecordKind::PolymerUnit, index, atom)?;
    }
    for &(a, b) in &unit.crossing_bonds {
        check_atom(RecordKind::PolymerUnit, index, a)?;
        check_atom(RecordKind::PolymerUnit, index, b)?;
    }
    if unit.subscript.len() > PolymerUnit::MAX_SUBSCRIPT_LEN || !unit.subscript.is_ascii() {
        return Err(ValidationError::out_of_range(RecordKind::PolymerUnit, index, "subscript", format!("{:?}", unit.subscript)));
    }
    Ok(())
}

fn check_v3000<F>(v3000: &V3000Extension, check_atom: &F) -> Result<(), ValidationError>
    where F: Fn(RecordKind, usize, usize) -> Result<(), ValidationError>
{
    for (i, atom) in v3000.referenced_atoms().enumerate() {
        check_atom(RecordKind::V3000, i, atom)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::{Bond, BondOrder};
    use crate::stereo::{Stereo0D, StereoParity};

    fn methane() -> MoleculeRequest {
        let mut req = MoleculeRequest::new();
        req.add_atom(Atom::new("C").with_implicit_hydrogens(4));
        req
    }

    #[test]
    fn accepts_minimal_structure() {
        assert_eq!(validate_with(&methane(), false), Ok(()));
        assert_eq!(validate_with(&MoleculeRequest::new(), false), Ok(()));
    }

    #[test]
    fn bond_endpoint_out_of_range() {
        let mut req = methane();
        req.add_bond(Bond::new(0, 1, BondOrder::Single));
        assert_eq!(validate_with(&req, false),
                   Err(ValidationError::DanglingReference { record: RecordKind::Bond, index: 0, atom: 1, atom_count: 1 }));
    }

    #[test]
    fn stereo_center_out_of_range() {
        let mut req = methane();
        req.add_stereo(Stereo0D::tetrahedral(3, [0, 0, 0, 0], StereoParity::Odd));
        assert!(matches!(validate_with(&req, false),
                         Err(ValidationError::DanglingReference { record: RecordKind::Stereo, index: 0, atom: 3, .. })));
    }

    #[test]
    fn bonds_are_checked_before_hydrogens() {
        let mut req = MoleculeRequest::new();
        req.add_atom(Atom::new("C").with_implicit_hydrogens(-1));
        req.add_bond(Bond::new(0, 5, BondOrder::Single));
        assert!(matches!(validate_with(&req, false), Err(ValidationError::DanglingReference { .. })));
    }

    #[test]
    fn negative_implicit_hydrogens() {
        let mut req = methane();
        req.add_atom(Atom::new("O").with_implicit_hydrogens(-2));
        assert_eq!(validate_with(&req, false),
                   Err(ValidationError::OutOfRange { record: RecordKind::Atom,
                                                     index: 1,
                                                     field: "implicit_hydrogens",
                                                     value: "-2".into() }));
    }

    #[test]
    fn isotopic_mass_width() {
        let mut req = methane();
        req.add_atom(Atom::new("C").with_isotopic_mass(IsotopicMass::Absolute(13)));
        req.add_atom(Atom::new("H").with_isotopic_mass(IsotopicMass::Shift(1)));
        assert_eq!(validate_with(&req, false), Ok(()));

        let mut too_heavy = methane();
        too_heavy.add_atom(Atom::new("C").with_isotopic_mass(IsotopicMass::Absolute(40_000)));
        assert!(matches!(validate_with(&too_heavy, false),
                         Err(ValidationError::OutOfRange { field: "isotopic_mass", index: 1, .. })));

        let mut big_shift = methane();
        big_shift.add_atom(Atom::new("C").with_isotopic_mass(IsotopicMass::Shift(500)));
        assert!(matches!(validate_with(&big_shift, false),
                         Err(ValidationError::OutOfRange { field: "isotopic_mass", .. })));
    }

    #[test]
    fn element_symbol_must_fit() {
        let mut req = methane();
        req.add_atom(Atom::new("Carbon"));
        assert!(matches!(validate_with(&req, false),
                         Err(ValidationError::OutOfRange { field: "element", index: 1, .. })));
    }

    #[test]
    fn element_symbol_rejects_nul() {
        let mut req = methane();
        req.add_atom(Atom::new("C\0l"));
        assert!(matches!(validate_with(&req, false),
                         Err(ValidationError::OutOfRange { field: "element", index: 1, .. })));
    }

    #[test]
    fn charge_must_fit_signed_byte() {
        let mut req = methane();
        req.add_atom(Atom::new("Fe").with_charge(300));
        assert!(matches!(validate_with(&req, false), Err(ValidationError::OutOfRange { field: "charge", .. })));
    }

    #[test]
    fn polymer_atoms_must_exist() {
        let mut req = methane();
        req.set_polymer(crate::extensions::Polymer { units: vec![PolymerUnit::sru(1, vec![0, 4], vec![])] });
        assert!(matches!(validate_with(&req, false),
                         Err(ValidationError::DanglingReference { record: RecordKind::PolymerUnit, atom: 4, .. })));
    }

    #[test]
    fn v3000_atoms_must_exist() {
        let mut req = methane();
        req.set_v3000(V3000Extension { star_atoms: vec![2], ..Default::default() });
        assert!(matches!(validate_with(&req, false),
                         Err(ValidationError::DanglingReference { record: RecordKind::V3000, atom: 2, .. })));
    }
}
