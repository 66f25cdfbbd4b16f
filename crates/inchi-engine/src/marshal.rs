//! Traducción de una `MoleculeRequest` a las estructuras C de `ffi`.
//!
//! `NativeInput` es dueño de todos los buffers (átomos, estereo, cadena de
//! opciones, listas de polímero y V3000). `as_raw` produce un
//! `inchi_InputEx` cuyos punteros apuntan a esos buffers: es válido mientras
//! el `NativeInput` no se modifique ni se libere.
//!
//! Cada enlace se escribe una sola vez. Va en la lista de vecinos del átomo
//! de inicio; si está llena (`MAXVAL`), en la del átomo final con la
//! dirección estereo invertida. Si ambas están llenas el enlace no cabe.
//!
//! Los índices de átomo de las listas de polímero y V3000 son 1-based.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr;

use inchi_core::constants::MAX_STANDARD_ATOMS;
use inchi_domain::{Atom, MoleculeRequest, Polymer, PolymerUnit, RecordKind, Stereo0D, V3000Extension, ValidationError};

use crate::ffi::{inchi_Atom, inchi_InputEx, inchi_Input_Polymer, inchi_Input_PolymerUnit, inchi_Input_V3000,
                 inchi_Stereo0D, AT_NUM, ATOM_EL_LEN, MAXVAL, NO_ATOM, POLYMER_SMT_LEN, S_CHAR};
use crate::EngineError;

#[derive(Debug)]
pub struct NativeInput {
    atoms: Vec<inchi_Atom>,
    stereo: Vec<inchi_Stereo0D>,
    options: CString,
    num_atoms: AT_NUM,
    num_stereo: AT_NUM,
    polymer: Option<PolymerBuffers>,
    v3000: Option<V3000Buffers>,
}

impl NativeInput {
    pub fn marshal(request: &MoleculeRequest, options: &str) -> Result<Self, EngineError> {
        let options = CString::new(options).map_err(|_| EngineError::InvalidOptionString(options.to_string()))?;
        let num_atoms = count_as_at_num(RecordKind::Atom, request.atom_count())?;
        let num_stereo = count_as_at_num(RecordKind::Stereo, request.stereo().len())?;

        let mut atoms = request.atoms()
                               .iter()
                               .enumerate()
                               .map(|(i, atom)| marshal_atom(i, atom))
                               .collect::<Result<Vec<_>, _>>()?;
        place_bonds(request, &mut atoms)?;

        let stereo = request.stereo()
                            .iter()
                            .enumerate()
                            .map(|(i, s)| marshal_stereo(i, s, request.atom_count()))
                            .collect::<Result<Vec<_>, _>>()?;

        let polymer = request.polymer().map(PolymerBuffers::new).transpose()?;
        let v3000 = request.v3000().map(|ext| V3000Buffers::new(ext, request.atom_count())).transpose()?;

        Ok(NativeInput { atoms, stereo, options, num_atoms, num_stereo, polymer, v3000 })
    }

    /// Vista C de la entrada. Los punteros se recalculan en cada llamada.
    pub fn as_raw(&mut self) -> inchi_InputEx {
        inchi_InputEx { atom: ptr_or_null(&mut self.atoms),
                        stereo0D: ptr_or_null(&mut self.stereo),
                        szOptions: self.options.as_ptr() as *mut c_char,
                        num_atoms: self.num_atoms,
                        num_stereo0D: self.num_stereo,
                        polymer: self.polymer.as_mut().map_or(ptr::null_mut(), PolymerBuffers::link),
                        v3000: self.v3000.as_mut().map_or(ptr::null_mut(), V3000Buffers::link) }
    }

    pub fn atoms(&self) -> &[inchi_Atom] {
        &self.atoms
    }

    pub fn stereo(&self) -> &[inchi_Stereo0D] {
        &self.stereo
    }

    pub fn options(&self) -> &CStr {
        &self.options
    }

    pub fn polymer_units(&self) -> &[inchi_Input_PolymerUnit] {
        self.polymer.as_ref().map(|p| p.units.as_slice()).unwrap_or_default()
    }

    /// Lista de átomos (1-based) de la unidad `unit`.
    pub fn polymer_atoms(&self, unit: usize) -> Option<&[c_int]> {
        self.polymer.as_ref().and_then(|p| p.atom_lists.get(unit)).map(Vec::as_slice)
    }

    /// Pares de átomos (1-based, aplanados) de los enlaces que cruzan la unidad `unit`.
    pub fn polymer_bonds(&self, unit: usize) -> Option<&[c_int]> {
        self.polymer.as_ref().and_then(|p| p.bond_lists.get(unit)).map(Vec::as_slice)
    }

    pub fn v3000(&self) -> Option<&inchi_Input_V3000> {
        self.v3000.as_ref().map(|v| &*v.header)
    }

    pub fn haptic_lists(&self) -> &[Vec<c_int>] {
        self.v3000.as_ref().map(|v| v.haptic.as_slice()).unwrap_or_default()
    }

    pub fn stereo_collections(&self) -> [&[Vec<c_int>]; 3] {
        match &self.v3000 {
            Some(v) => [v.steabs.as_slice(), v.sterel.as_slice(), v.sterac.as_slice()],
            None => [&[], &[], &[]],
        }
    }
}

fn ptr_or_null<T>(buf: &mut [T]) -> *mut T {
    if buf.is_empty() {
        ptr::null_mut()
    } else {
        buf.as_mut_ptr()
    }
}

fn count_as_at_num(record: RecordKind, count: usize) -> Result<AT_NUM, ValidationError> {
    AT_NUM::try_from(count).map_err(|_| ValidationError::StructureTooLarge { record, count, limit: MAX_STANDARD_ATOMS })
}

fn narrow<T, V>(record: RecordKind, index: usize, field: &'static str, value: V) -> Result<T, ValidationError>
    where T: TryFrom<V>,
          V: Copy + ToString
{
    T::try_from(value).map_err(|_| ValidationError::OutOfRange { record, index, field, value: value.to_string() })
}

fn marshal_atom(index: usize, atom: &Atom) -> Result<inchi_Atom, ValidationError> {
    let mut native = inchi_Atom::default();
    if let Some([x, y, z]) = atom.coordinates {
        native.x = x;
        native.y = y;
        native.z = z;
    }

    let symbol = atom.element.as_bytes();
    if symbol.is_empty() || symbol.len() >= ATOM_EL_LEN || !atom.element.is_ascii() || symbol.contains(&0) {
        return Err(ValidationError::OutOfRange { record: RecordKind::Atom,
                                                 index,
                                                 field: "element",
                                                 value: atom.element.clone() });
    }
    for (slot, byte) in native.elname.iter_mut().zip(symbol) {
        *slot = *byte as c_char;
    }

    native.num_iso_H[0] = narrow(RecordKind::Atom, index, "implicit_hydrogens", atom.implicit_hydrogens.unwrap_or(-1))?;
    for (k, count) in atom.isotopic_hydrogens.iter().enumerate() {
        native.num_iso_H[k + 1] = narrow(RecordKind::Atom, index, "isotopic_hydrogens", *count)?;
    }
    if let Some(mass) = atom.isotopic_mass {
        native.isotopic_mass = narrow(RecordKind::Atom, index, "isotopic_mass", mass.raw())?;
    }
    native.radical = atom.radical.code();
    native.charge = narrow(RecordKind::Atom, index, "charge", atom.charge)?;
    Ok(native)
}

fn place_bonds(request: &MoleculeRequest, atoms: &mut [inchi_Atom]) -> Result<(), ValidationError> {
    let atom_count = atoms.len();
    for (i, bond) in request.bonds().iter().enumerate() {
        for atom in [bond.start, bond.end] {
            if atom >= atom_count {
                return Err(ValidationError::DanglingReference { record: RecordKind::Bond, index: i, atom, atom_count });
            }
        }
        // Los índices ya caben en AT_NUM: num_atoms se comprobó antes.
        let (owner, neighbor, stereo) = if (atoms[bond.start].num_bonds as usize) < MAXVAL {
            (bond.start, bond.end, bond.stereo.code_from_start())
        } else if (atoms[bond.end].num_bonds as usize) < MAXVAL {
            (bond.end, bond.start, bond.stereo.code_from_end())
        } else {
            return Err(ValidationError::OutOfRange { record: RecordKind::Bond,
                                                     index: i,
                                                     field: "num_bonds",
                                                     value: MAXVAL.to_string() });
        };
        let slot = &mut atoms[owner];
        let k = slot.num_bonds as usize;
        slot.neighbor[k] = neighbor as AT_NUM;
        slot.bond_type[k] = bond.order.code();
        slot.bond_stereo[k] = stereo;
        slot.num_bonds += 1;
    }
    Ok(())
}

fn marshal_stereo(index: usize, stereo: &Stereo0D, atom_count: usize) -> Result<inchi_Stereo0D, ValidationError> {
    let check = |atom: usize| -> Result<AT_NUM, ValidationError> {
        if atom < atom_count {
            narrow(RecordKind::Stereo, index, "atom", atom)
        } else {
            Err(ValidationError::DanglingReference { record: RecordKind::Stereo, index, atom, atom_count })
        }
    };
    let mut neighbor = [NO_ATOM; 4];
    for (slot, atom) in neighbor.iter_mut().zip(stereo.neighbors) {
        *slot = check(atom)?;
    }
    let central_atom = stereo.kind.central_atom().map(check).transpose()?.unwrap_or(NO_ATOM);
    Ok(inchi_Stereo0D { neighbor,
                        central_atom,
                        type_: stereo.kind.code() as S_CHAR,
                        parity: stereo.parity.code() as S_CHAR })
}

fn one_based(record: RecordKind, index: usize, atom: usize) -> Result<c_int, ValidationError> {
    narrow(record, index, "atom", atom + 1)
}

#[derive(Debug)]
struct PolymerBuffers {
    units: Vec<inchi_Input_PolymerUnit>,
    atom_lists: Vec<Vec<c_int>>,
    bond_lists: Vec<Vec<c_int>>,
    unit_ptrs: Vec<*mut inchi_Input_PolymerUnit>,
    header: Box<inchi_Input_Polymer>,
}

impl PolymerBuffers {
    fn new(polymer: &Polymer) -> Result<Self, ValidationError> {
        let mut units = Vec::with_capacity(polymer.units.len());
        let mut atom_lists = Vec::with_capacity(polymer.units.len());
        let mut bond_lists = Vec::with_capacity(polymer.units.len());
        for (i, unit) in polymer.units.iter().enumerate() {
            let atoms = unit.atoms
                            .iter()
                            .map(|a| one_based(RecordKind::PolymerUnit, i, *a))
                            .collect::<Result<Vec<_>, _>>()?;
            let bonds = unit.crossing_bonds
                            .iter()
                            .flat_map(|(a, b)| [*a, *b])
                            .map(|a| one_based(RecordKind::PolymerUnit, i, a))
                            .collect::<Result<Vec<_>, _>>()?;
            units.push(polymer_unit(i, unit, atoms.len(), unit.crossing_bonds.len())?);
            atom_lists.push(atoms);
            bond_lists.push(bonds);
        }
        let n = narrow(RecordKind::PolymerUnit, units.len(), "units", units.len())?;
        Ok(PolymerBuffers { units,
                            atom_lists,
                            bond_lists,
                            unit_ptrs: Vec::new(),
                            header: Box::new(inchi_Input_Polymer { units: ptr::null_mut(), n }) })
    }

    fn link(&mut self) -> *mut inchi_Input_Polymer {
        for ((unit, atoms), bonds) in self.units.iter_mut().zip(&mut self.atom_lists).zip(&mut self.bond_lists) {
            unit.alist = ptr_or_null(atoms);
            unit.blist = ptr_or_null(bonds);
        }
        self.unit_ptrs = self.units.iter_mut().map(|u| u as *mut inchi_Input_PolymerUnit).collect();
        self.header.units = ptr_or_null(&mut self.unit_ptrs);
        &mut *self.header
    }
}

fn polymer_unit(index: usize, unit: &PolymerUnit, na: usize, nb: usize) -> Result<inchi_Input_PolymerUnit, ValidationError> {
    let record = RecordKind::PolymerUnit;
    let subscript = unit.subscript.as_bytes();
    if subscript.len() >= POLYMER_SMT_LEN || subscript.contains(&0) {
        return Err(ValidationError::OutOfRange { record, index, field: "subscript", value: unit.subscript.clone() });
    }
    let mut smt = [0 as c_char; POLYMER_SMT_LEN];
    for (slot, byte) in smt.iter_mut().zip(subscript) {
        *slot = *byte as c_char;
    }
    Ok(inchi_Input_PolymerUnit { id: unit.id,
                                 type_: unit.kind.code(),
                                 subtype: unit.subtype.code(),
                                 conn: unit.connection.code(),
                                 label: unit.label,
                                 na: narrow(record, index, "atoms", na)?,
                                 nb: narrow(record, index, "crossing_bonds", nb)?,
                                 xbr1: unit.brackets[0],
                                 xbr2: unit.brackets[1],
                                 smt,
                                 alist: ptr::null_mut(),
                                 blist: ptr::null_mut() })
}

#[derive(Debug)]
struct V3000Buffers {
    haptic: Vec<Vec<c_int>>,
    steabs: Vec<Vec<c_int>>,
    sterel: Vec<Vec<c_int>>,
    sterac: Vec<Vec<c_int>>,
    haptic_ptrs: Vec<*mut c_int>,
    steabs_ptrs: Vec<*mut c_int>,
    sterel_ptrs: Vec<*mut c_int>,
    sterac_ptrs: Vec<*mut c_int>,
    header: Box<inchi_Input_V3000>,
}

impl V3000Buffers {
    fn new(ext: &V3000Extension, atom_count: usize) -> Result<Self, ValidationError> {
        let record = RecordKind::V3000;
        let haptic = ext.haptic_bonds
                        .iter()
                        .enumerate()
                        .map(|(i, h)| {
                            let mut list = Vec::with_capacity(h.endpoints.len() + 3);
                            list.push(h.order);
                            list.push(one_based(record, i, h.atom)?);
                            list.push(narrow(record, i, "endpoints", h.endpoints.len())?);
                            for e in &h.endpoints {
                                list.push(one_based(record, i, *e)?);
                            }
                            Ok(list)
                        })
                        .collect::<Result<Vec<_>, ValidationError>>()?;
        let steabs = collections(&ext.stereo_absolute)?;
        let sterel = collections(&ext.stereo_relative)?;
        let sterac = collections(&ext.stereo_racemic)?;

        let n_star = ext.star_atoms.len();
        let n_collections = steabs.len() + sterel.len() + sterac.len();
        let header = inchi_Input_V3000 { n_non_star_atoms: narrow(record, 0, "atoms", atom_count.saturating_sub(n_star))?,
                                         n_star_atoms: narrow(record, 0, "star_atoms", n_star)?,
                                         n_collections: narrow(record, 0, "collections", n_collections)?,
                                         n_haptic_bonds: narrow(record, 0, "haptic_bonds", haptic.len())?,
                                         n_steabs: narrow(record, 0, "stereo_absolute", steabs.len())?,
                                         n_sterel: narrow(record, 0, "stereo_relative", sterel.len())?,
                                         n_sterac: narrow(record, 0, "stereo_racemic", sterac.len())?,
                                         ..inchi_Input_V3000::default() };
        Ok(V3000Buffers { haptic,
                          steabs,
                          sterel,
                          sterac,
                          haptic_ptrs: Vec::new(),
                          steabs_ptrs: Vec::new(),
                          sterel_ptrs: Vec::new(),
                          sterac_ptrs: Vec::new(),
                          header: Box::new(header) })
    }

    fn link(&mut self) -> *mut inchi_Input_V3000 {
        self.haptic_ptrs = self.haptic.iter_mut().map(|l| l.as_mut_ptr()).collect();
        self.steabs_ptrs = self.steabs.iter_mut().map(|l| l.as_mut_ptr()).collect();
        self.sterel_ptrs = self.sterel.iter_mut().map(|l| l.as_mut_ptr()).collect();
        self.sterac_ptrs = self.sterac.iter_mut().map(|l| l.as_mut_ptr()).collect();
        self.header.lists_haptic_bonds = ptr_or_null(&mut self.haptic_ptrs);
        self.header.lists_steabs = ptr_or_null(&mut self.steabs_ptrs);
        self.header.lists_sterel = ptr_or_null(&mut self.sterel_ptrs);
        self.header.lists_sterac = ptr_or_null(&mut self.sterac_ptrs);
        &mut *self.header
    }
}

/// `[n, a1, a2, ...]` por colección.
fn collections(lists: &[Vec<usize>]) -> Result<Vec<Vec<c_int>>, ValidationError> {
    lists.iter()
         .enumerate()
         .map(|(i, atoms)| {
             let mut list = Vec::with_capacity(atoms.len() + 1);
             list.push(narrow(RecordKind::V3000, i, "collection", atoms.len())?);
             for a in atoms {
                 list.push(one_based(RecordKind::V3000, i, *a)?);
             }
             Ok(list)
         })
         .collect()
}
