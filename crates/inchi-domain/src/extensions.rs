//! Bloques extendidos de la entrada (API 1.05+): polímeros y V3000.
//!
//! Los índices de átomo son base 0 como en el resto de la petición; el
//! marshaling los convierte a la numeración base 1 que espera la librería.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolymerUnitType {
    #[default]
    None,
    /// Unidad estructural repetitiva.
    Sru,
    Mon,
    Cop,
    Mod,
    Cro,
    Mer,
}

impl PolymerUnitType {
    pub fn code(self) -> i32 {
        match self {
            PolymerUnitType::None => 0,
            PolymerUnitType::Sru => 1,
            PolymerUnitType::Mon => 2,
            PolymerUnitType::Cop => 3,
            PolymerUnitType::Mod => 4,
            PolymerUnitType::Cro => 5,
            PolymerUnitType::Mer => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolymerSubtype {
    #[default]
    None,
    Alternating,
    Random,
    Block,
}

impl PolymerSubtype {
    pub fn code(self) -> i32 {
        match self {
            PolymerSubtype::None => 0,
            PolymerSubtype::Alternating => 1,
            PolymerSubtype::Random => 2,
            PolymerSubtype::Block => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolymerConnection {
    #[default]
    None,
    HeadToTail,
    HeadToHead,
    Either,
}

impl PolymerConnection {
    pub fn code(self) -> i32 {
        match self {
            PolymerConnection::None => 0,
            PolymerConnection::HeadToTail => 1,
            PolymerConnection::HeadToHead => 2,
            PolymerConnection::Either => 3,
        }
    }
}

/// Una unidad (Sgroup) de polímero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolymerUnit {
    pub id: i32,
    #[serde(default)]
    pub kind: PolymerUnitType,
    #[serde(default)]
    pub subtype: PolymerSubtype,
    #[serde(default)]
    pub connection: PolymerConnection,
    #[serde(default)]
    pub label: i32,
    pub atoms: Vec<usize>,
    /// Enlaces que cruzan los corchetes, como pares de átomos.
    #[serde(default)]
    pub crossing_bonds: Vec<(usize, usize)>,
    /// Coordenadas de los dos corchetes (x1, y1, x2, y2 cada uno).
    #[serde(default)]
    pub brackets: [[f64; 4]; 2],
    /// Subíndice (p. ej. "n"); la librería admite hasta 79 bytes.
    #[serde(default)]
    pub subscript: String,
}

impl PolymerUnit {
    pub const MAX_SUBSCRIPT_LEN: usize = 79;

    pub fn sru(id: i32, atoms: Vec<usize>, crossing_bonds: Vec<(usize, usize)>) -> Self {
        PolymerUnit { id,
                      kind: PolymerUnitType::Sru,
                      subtype: PolymerSubtype::None,
                      connection: PolymerConnection::HeadToTail,
                      label: 0,
                      atoms,
                      crossing_bonds,
                      brackets: [[0.0; 4]; 2],
                      subscript: "n".to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polymer {
    pub units: Vec<PolymerUnit>,
}

/// Enlace háptico (multicentro) de V3000: un átomo no estrella unido a
/// varios extremos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HapticBond {
    pub order: i32,
    pub atom: usize,
    pub endpoints: Vec<usize>,
}

/// Datos de un molfile V3000 que no caben en la tabla de conexiones clásica.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V3000Extension {
    /// Índices de los átomos estrella (`*`).
    #[serde(default)]
    pub star_atoms: Vec<usize>,
    #[serde(default)]
    pub haptic_bonds: Vec<HapticBond>,
    /// Colecciones de estereo absoluto, relativo y racémico.
    #[serde(default)]
    pub stereo_absolute: Vec<Vec<usize>>,
    #[serde(default)]
    pub stereo_relative: Vec<Vec<usize>>,
    #[serde(default)]
    pub stereo_racemic: Vec<Vec<usize>>,
}

impl V3000Extension {
    /// Todas las referencias a átomos, para validar.
    pub fn referenced_atoms(&self) -> impl Iterator<Item = usize> + '_ {
        let haptic = self.haptic_bonds.iter().flat_map(|h| std::iter::once(h.atom).chain(h.endpoints.iter().copied()));
        let collections = self.stereo_absolute
                              .iter()
                              .chain(&self.stereo_relative)
                              .chain(&self.stereo_racemic)
                              .flat_map(|c| c.iter().copied());
        self.star_atoms.iter().copied().chain(haptic).chain(collections)
    }
}
