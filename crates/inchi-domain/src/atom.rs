use serde::{Deserialize, Serialize};

/// Radical del átomo, con los códigos de la API nativa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radical {
    #[default]
    None,
    Singlet,
    Doublet,
    Triplet,
}

impl Radical {
    pub fn code(self) -> i8 {
        match self {
            Radical::None => 0,
            Radical::Singlet => 1,
            Radical::Doublet => 2,
            Radical::Triplet => 3,
        }
    }
}

/// Masa isotópica tal como la acepta la librería.
///
/// `Absolute` es el número másico (13 para ¹³C). `Shift` es la diferencia
/// respecto de la masa media del elemento; se codifica sumando
/// `ISOTOPIC_SHIFT_FLAG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsotopicMass {
    Absolute(i32),
    Shift(i32),
}

impl IsotopicMass {
    pub const ISOTOPIC_SHIFT_FLAG: i32 = 10000;
    pub const ISOTOPIC_SHIFT_MAX: i32 = 100;

    /// Valor que viaja en el campo `isotopic_mass` nativo, sin comprobar el
    /// ancho (eso lo hace la validación).
    pub fn raw(self) -> i32 {
        match self {
            IsotopicMass::Absolute(mass) => mass,
            IsotopicMass::Shift(delta) => Self::ISOTOPIC_SHIFT_FLAG + delta,
        }
    }
}

/// Un átomo de la petición.
///
/// `implicit_hydrogens = None` deja que la librería calcule los hidrógenos
/// implícitos; `isotopic_hydrogens` son los implícitos ¹H, ²H y ³H.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    #[serde(default)]
    pub coordinates: Option<[f64; 3]>,
    #[serde(default)]
    pub charge: i32,
    #[serde(default)]
    pub isotopic_mass: Option<IsotopicMass>,
    #[serde(default)]
    pub implicit_hydrogens: Option<i32>,
    #[serde(default)]
    pub isotopic_hydrogens: [i32; 3],
    #[serde(default)]
    pub radical: Radical,
}

impl Atom {
    pub fn new(element: impl Into<String>) -> Self {
        Atom { element: element.into(),
               coordinates: None,
               charge: 0,
               isotopic_mass: None,
               implicit_hydrogens: None,
               isotopic_hydrogens: [0; 3],
               radical: Radical::None }
    }

    pub fn with_coordinates(mut self, x: f64, y: f64, z: f64) -> Self {
        self.coordinates = Some([x, y, z]);
        self
    }

    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_isotopic_mass(mut self, mass: IsotopicMass) -> Self {
        self.isotopic_mass = Some(mass);
        self
    }

    pub fn with_implicit_hydrogens(mut self, count: i32) -> Self {
        self.implicit_hydrogens = Some(count);
        self
    }

    pub fn with_isotopic_hydrogens(mut self, protium: i32, deuterium: i32, tritium: i32) -> Self {
        self.isotopic_hydrogens = [protium, deuterium, tritium];
        self
    }

    pub fn with_radical(mut self, radical: Radical) -> Self {
        self.radical = radical;
        self
    }
}
