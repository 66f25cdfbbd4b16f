use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondOrder {
    None,
    #[default]
    Single,
    Double,
    Triple,
    /// Aromática / alternante; se desaconseja salvo que no haya alternativa.
    Altern,
}

impl BondOrder {
    pub fn code(self) -> i8 {
        match self {
            BondOrder::None => 0,
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Altern => 4,
        }
    }
}

/// Estereo de enlace 2D, referido al átomo `start` del enlace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondStereo {
    #[default]
    None,
    SingleUp,
    SingleEither,
    SingleDown,
    DoubleEither,
}

impl BondStereo {
    /// Código nativo cuando el enlace se declara en la lista del átomo
    /// `start` (el centro estereo es ese átomo).
    pub fn code_from_start(self) -> i8 {
        match self {
            BondStereo::None => 0,
            BondStereo::SingleUp => 1,
            BondStereo::DoubleEither => 3,
            BondStereo::SingleEither => 4,
            BondStereo::SingleDown => 6,
        }
    }

    /// Código nativo cuando el enlace se declara en la lista del átomo `end`:
    /// los estereo simples cambian de signo (`SINGLE_2*`).
    pub fn code_from_end(self) -> i8 {
        match self {
            BondStereo::None | BondStereo::DoubleEither => self.code_from_start(),
            single => -single.code_from_start(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bond {
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub order: BondOrder,
    #[serde(default)]
    pub stereo: BondStereo,
}

impl Bond {
    pub fn new(start: usize, end: usize, order: BondOrder) -> Self {
        Bond { start, end, order, stereo: BondStereo::None }
    }

    pub fn with_stereo(mut self, stereo: BondStereo) -> Self {
        self.stereo = stereo;
        self
    }
}
