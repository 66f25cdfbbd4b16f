use serde::{Deserialize, Serialize};

/// Tipo de elemento estereo 0D. Tetraédrico y aleno llevan átomo central;
/// el doble enlace no (en nativo, `NO_ATOM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StereoKind {
    DoubleBond,
    Tetrahedral { central_atom: usize },
    Allene { central_atom: usize },
}

impl StereoKind {
    pub fn code(self) -> i8 {
        match self {
            StereoKind::DoubleBond => 1,
            StereoKind::Tetrahedral { .. } => 2,
            StereoKind::Allene { .. } => 3,
        }
    }

    pub fn central_atom(self) -> Option<usize> {
        match self {
            StereoKind::DoubleBond => None,
            StereoKind::Tetrahedral { central_atom } | StereoKind::Allene { central_atom } => Some(central_atom),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StereoParity {
    #[default]
    None,
    Odd,
    Even,
    Unknown,
    Undefined,
}

impl StereoParity {
    pub fn code(self) -> i8 {
        match self {
            StereoParity::None => 0,
            StereoParity::Odd => 1,
            StereoParity::Even => 2,
            StereoParity::Unknown => 3,
            StereoParity::Undefined => 4,
        }
    }
}

/// Descriptor estereo 0D: tipo, cuatro vecinos y paridad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stereo0D {
    #[serde(flatten)]
    pub kind: StereoKind,
    pub neighbors: [usize; 4],
    #[serde(default)]
    pub parity: StereoParity,
}

impl Stereo0D {
    pub fn tetrahedral(central_atom: usize, neighbors: [usize; 4], parity: StereoParity) -> Self {
        Stereo0D { kind: StereoKind::Tetrahedral { central_atom }, neighbors, parity }
    }

    /// `neighbors` = [vecino de a, a, b, vecino de b] para el doble enlace a=b.
    pub fn double_bond(neighbors: [usize; 4], parity: StereoParity) -> Self {
        Stereo0D { kind: StereoKind::DoubleBond, neighbors, parity }
    }

    pub fn allene(central_atom: usize, neighbors: [usize; 4], parity: StereoParity) -> Self {
        Stereo0D { kind: StereoKind::Allene { central_atom }, neighbors, parity }
    }

    /// Todos los átomos referenciados (central primero si existe).
    pub fn referenced_atoms(&self) -> impl Iterator<Item = usize> + '_ {
        self.kind.central_atom().into_iter().chain(self.neighbors.iter().copied())
    }
}
