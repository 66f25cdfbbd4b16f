use serde::{Deserialize, Serialize};
use std::fmt;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::extensions::{Polymer, V3000Extension};
use crate::hashing;
use crate::stereo::Stereo0D;

/// Representación en memoria de una estructura de entrada.
///
/// El llamador la construye (átomos, enlaces, estereo 0D y bloques
/// opcionales) y después la entrega en sólo lectura a la validación y al
/// marshaling. Las invariantes de índices no se comprueban al agregar
/// registros sino en `validation::validate`, para poder reportar el primer
/// error con su índice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoleculeRequest {
    #[serde(default)]
    atoms: Vec<Atom>,
    #[serde(default)]
    bonds: Vec<Bond>,
    #[serde(default)]
    stereo: Vec<Stereo0D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    polymer: Option<Polymer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    v3000: Option<V3000Extension>,
}

impl MoleculeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un átomo y devuelve su índice.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    pub fn add_bond(&mut self, bond: Bond) -> &mut Self {
        self.bonds.push(bond);
        self
    }

    /// Atajo para un enlace sin estereo.
    pub fn connect(&mut self, start: usize, end: usize, order: BondOrder) -> &mut Self {
        self.add_bond(Bond::new(start, end, order))
    }

    pub fn add_stereo(&mut self, stereo: Stereo0D) -> &mut Self {
        self.stereo.push(stereo);
        self
    }

    pub fn set_polymer(&mut self, polymer: Polymer) -> &mut Self {
        self.polymer = Some(polymer);
        self
    }

    pub fn set_v3000(&mut self, v3000: V3000Extension) -> &mut Self {
        self.v3000 = Some(v3000);
        self
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn stereo(&self) -> &[Stereo0D] {
        &self.stereo
    }

    pub fn polymer(&self) -> Option<&Polymer> {
        self.polymer.as_ref()
    }

    pub fn v3000(&self) -> Option<&V3000Extension> {
        self.v3000.as_ref()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// sha256 del JSON canónico de la petición; sirve para correlacionar
    /// llamadas en los logs.
    pub fn content_hash(&self) -> Result<String, serde_json::Error> {
        let value = serde_json::to_value(self)?;
        Ok(hashing::hash_value(&value))
    }
}

impl fmt::Display for MoleculeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "MoleculeRequest(atoms: {}, bonds: {}, stereo: {}{}{})",
               self.atoms.len(),
               self.bonds.len(),
               self.stereo.len(),
               if self.polymer.is_some() { ", polymer" } else { "" },
               if self.v3000.is_some() { ", v3000" } else { "" })
    }
}
