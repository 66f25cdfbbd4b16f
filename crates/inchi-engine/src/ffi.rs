//! Espejos `#[repr(C)]` de las estructuras de `inchi_api.h` (API 1.05+).
//!
//! El orden de los campos es el del header y no debe cambiarse: el layout lo
//! dicta la librería nativa. Sólo se declaran las estructuras que usa
//! `GetINCHIEx`.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::{c_char, c_int, c_schar, c_short};
use std::ptr;

/// Índice de átomo nativo (`short`).
pub type AT_NUM = c_short;
pub type S_CHAR = c_schar;

pub const MAXVAL: usize = 20;
pub const ATOM_EL_LEN: usize = 6;
pub const NUM_H_ISOTOPES: usize = 3;
pub const NO_ATOM: AT_NUM = -1;
pub const POLYMER_SMT_LEN: usize = 80;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct inchi_Atom {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub neighbor: [AT_NUM; MAXVAL],
    pub bond_type: [S_CHAR; MAXVAL],
    pub bond_stereo: [S_CHAR; MAXVAL],
    pub elname: [c_char; ATOM_EL_LEN],
    pub num_bonds: AT_NUM,
    /// `[0]` hidrógenos implícitos no isotópicos (-1 = automático), luego ¹H, ²H, ³H.
    pub num_iso_H: [S_CHAR; NUM_H_ISOTOPES + 1],
    pub isotopic_mass: AT_NUM,
    pub radical: S_CHAR,
    pub charge: S_CHAR,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct inchi_Stereo0D {
    pub neighbor: [AT_NUM; 4],
    pub central_atom: AT_NUM,
    pub type_: S_CHAR,
    pub parity: S_CHAR,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct inchi_Input_PolymerUnit {
    pub id: c_int,
    pub type_: c_int,
    pub subtype: c_int,
    pub conn: c_int,
    pub label: c_int,
    pub na: c_int,
    pub nb: c_int,
    pub xbr1: [f64; 4],
    pub xbr2: [f64; 4],
    pub smt: [c_char; POLYMER_SMT_LEN],
    pub alist: *mut c_int,
    pub blist: *mut c_int,
}

impl Default for inchi_Input_PolymerUnit {
    fn default() -> Self {
        inchi_Input_PolymerUnit { id: 0,
                                  type_: 0,
                                  subtype: 0,
                                  conn: 0,
                                  label: 0,
                                  na: 0,
                                  nb: 0,
                                  xbr1: [0.0; 4],
                                  xbr2: [0.0; 4],
                                  smt: [0; POLYMER_SMT_LEN],
                                  alist: ptr::null_mut(),
                                  blist: ptr::null_mut() }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct inchi_Input_Polymer {
    pub units: *mut *mut inchi_Input_PolymerUnit,
    pub n: c_int,
}

impl Default for inchi_Input_Polymer {
    fn default() -> Self {
        inchi_Input_Polymer { units: ptr::null_mut(), n: 0 }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct inchi_Input_V3000 {
    pub n_non_star_atoms: c_int,
    pub n_star_atoms: c_int,
    pub atom_index_orig: *mut c_int,
    pub atom_index_fin: *mut c_int,
    pub n_sgroups: c_int,
    pub n_3d_constraints: c_int,
    pub n_collections: c_int,
    pub n_non_haptic_bonds: c_int,
    pub n_haptic_bonds: c_int,
    pub lists_haptic_bonds: *mut *mut c_int,
    pub n_steabs: c_int,
    pub lists_steabs: *mut *mut c_int,
    pub n_sterel: c_int,
    pub lists_sterel: *mut *mut c_int,
    pub n_sterac: c_int,
    pub lists_sterac: *mut *mut c_int,
}

impl Default for inchi_Input_V3000 {
    fn default() -> Self {
        inchi_Input_V3000 { n_non_star_atoms: 0,
                            n_star_atoms: 0,
                            atom_index_orig: ptr::null_mut(),
                            atom_index_fin: ptr::null_mut(),
                            n_sgroups: 0,
                            n_3d_constraints: 0,
                            n_collections: 0,
                            n_non_haptic_bonds: 0,
                            n_haptic_bonds: 0,
                            lists_haptic_bonds: ptr::null_mut(),
                            n_steabs: 0,
                            lists_steabs: ptr::null_mut(),
                            n_sterel: 0,
                            lists_sterel: ptr::null_mut(),
                            n_sterac: 0,
                            lists_sterac: ptr::null_mut() }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct inchi_InputEx {
    pub atom: *mut inchi_Atom,
    pub stereo0D: *mut inchi_Stereo0D,
    /// Opciones separadas por espacios, cada una con su prefijo.
    pub szOptions: *mut c_char,
    pub num_atoms: AT_NUM,
    pub num_stereo0D: AT_NUM,
    pub polymer: *mut inchi_Input_Polymer,
    pub v3000: *mut inchi_Input_V3000,
}

#[repr(C)]
#[derive(Debug)]
pub struct inchi_Output {
    pub szInChI: *mut c_char,
    pub szAuxInfo: *mut c_char,
    pub szMessage: *mut c_char,
    pub szLog: *mut c_char,
}

impl Default for inchi_Output {
    fn default() -> Self {
        inchi_Output { szInChI: ptr::null_mut(),
                       szAuxInfo: ptr::null_mut(),
                       szMessage: ptr::null_mut(),
                       szLog: ptr::null_mut() }
    }
}

/// `int GetINCHIEx(inchi_InputEx *inp, inchi_Output *out)`
pub type GetINCHIExFn = unsafe extern "C" fn(*mut inchi_InputEx, *mut inchi_Output) -> c_int;
/// `void FreeINCHI(inchi_Output *out)`
pub type FreeINCHIFn = unsafe extern "C" fn(*mut inchi_Output);

pub const GET_INCHI_EX_SYMBOL: &[u8] = b"GetINCHIEx\0";
pub const FREE_INCHI_SYMBOL: &[u8] = b"FreeINCHI\0";

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn atom_layout_matches_header() {
        // 3 doubles + 20 shorts + 2*20 chars + 6 chars + short + 4 chars + short + 2 chars = 146,
        // rellenado al alineamiento de double
        assert_eq!(size_of::<inchi_Atom>(), 152);
        assert_eq!(align_of::<inchi_Atom>(), 8);
    }

    #[test]
    fn stereo_layout_matches_header() {
        assert_eq!(size_of::<inchi_Stereo0D>(), 12);
    }

    #[test]
    fn output_is_four_pointers() {
        assert_eq!(size_of::<inchi_Output>(), 4 * size_of::<*mut c_char>());
    }
}
