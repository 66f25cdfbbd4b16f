//! Registro estático de flags reconocidos por la librería nativa.
//!
//! El orden de declaración de `InchiFlag` es el orden canónico: el
//! serializador lo usa para emitir las opciones, por lo que reordenar
//! variantes cambia la cadena producida (y su fingerprint).
//!
//! Los grupos de exclusión mutua sólo se definen aquí; el builder se limita a
//! hacerlos cumplir.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Aridad del argumento de un flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgKind {
    /// Interruptor sin argumento.
    Switch,
    /// Entero obligatorio (no negativo).
    Integer,
    /// Cadena obligatoria, no vacía y sin espacios.
    String,
}

/// Conjuntos de flags de los que sólo uno puede estar seleccionado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExclusionGroup {
    StereoInterpretation,
    ChiralFlag,
    PolymerMode,
    Timeout,
}

impl ExclusionGroup {
    pub fn name(self) -> &'static str {
        match self {
            ExclusionGroup::StereoInterpretation => "stereo-interpretation",
            ExclusionGroup::ChiralFlag => "chiral-flag",
            ExclusionGroup::PolymerMode => "polymer-mode",
            ExclusionGroup::Timeout => "timeout",
        }
    }
}

impl fmt::Display for ExclusionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opciones de generación reconocidas.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InchiFlag {
    SNon,
    SRel,
    SRac,
    SUCF,
    SUU,
    SLUUD,
    ChiralFlagON,
    ChiralFlagOFF,
    RecMet,
    FixedH,
    KET,
    OneFiveT,
    NPZz,
    SAtZz,
    Polymers,
    Polymers105,
    FoldCRU,
    NoFrameShift,
    NoEdits,
    LargeMolecules,
    AuxNone,
    WarnOnEmptyStructure,
    SaveOpt,
    OutErrInChI,
    Timeout,
    TimeoutMs,
    /// Interruptor nativo que el registro no enumera; el argumento es el
    /// token completo y se emite tras el prefijo, sin token propio.
    RawOption,
}

impl InchiFlag {
    /// Todos los flags en orden canónico.
    pub const ALL: [InchiFlag; 27] = [InchiFlag::SNon,
                                      InchiFlag::SRel,
                                      InchiFlag::SRac,
                                      InchiFlag::SUCF,
                                      InchiFlag::SUU,
                                      InchiFlag::SLUUD,
                                      InchiFlag::ChiralFlagON,
                                      InchiFlag::ChiralFlagOFF,
                                      InchiFlag::RecMet,
                                      InchiFlag::FixedH,
                                      InchiFlag::KET,
                                      InchiFlag::OneFiveT,
                                      InchiFlag::NPZz,
                                      InchiFlag::SAtZz,
                                      InchiFlag::Polymers,
                                      InchiFlag::Polymers105,
                                      InchiFlag::FoldCRU,
                                      InchiFlag::NoFrameShift,
                                      InchiFlag::NoEdits,
                                      InchiFlag::LargeMolecules,
                                      InchiFlag::AuxNone,
                                      InchiFlag::WarnOnEmptyStructure,
                                      InchiFlag::SaveOpt,
                                      InchiFlag::OutErrInChI,
                                      InchiFlag::Timeout,
                                      InchiFlag::TimeoutMs,
                                      InchiFlag::RawOption];

    /// Nombre simbólico (el de la variante).
    pub fn name(self) -> &'static str {
        match self {
            InchiFlag::SNon => "SNon",
            InchiFlag::SRel => "SRel",
            InchiFlag::SRac => "SRac",
            InchiFlag::SUCF => "SUCF",
            InchiFlag::SUU => "SUU",
            InchiFlag::SLUUD => "SLUUD",
            InchiFlag::ChiralFlagON => "ChiralFlagON",
            InchiFlag::ChiralFlagOFF => "ChiralFlagOFF",
            InchiFlag::RecMet => "RecMet",
            InchiFlag::FixedH => "FixedH",
            InchiFlag::KET => "KET",
            InchiFlag::OneFiveT => "OneFiveT",
            InchiFlag::NPZz => "NPZz",
            InchiFlag::SAtZz => "SAtZz",
            InchiFlag::Polymers => "Polymers",
            InchiFlag::Polymers105 => "Polymers105",
            InchiFlag::FoldCRU => "FoldCRU",
            InchiFlag::NoFrameShift => "NoFrameShift",
            InchiFlag::NoEdits => "NoEdits",
            InchiFlag::LargeMolecules => "LargeMolecules",
            InchiFlag::AuxNone => "AuxNone",
            InchiFlag::WarnOnEmptyStructure => "WarnOnEmptyStructure",
            InchiFlag::SaveOpt => "SaveOpt",
            InchiFlag::OutErrInChI => "OutErrInChI",
            InchiFlag::Timeout => "Timeout",
            InchiFlag::TimeoutMs => "TimeoutMs",
            InchiFlag::RawOption => "RawOption",
        }
    }

    /// Token que entiende la librería nativa. Vacío para `RawOption`.
    pub fn token(self) -> &'static str {
        match self {
            InchiFlag::OneFiveT => "15T",
            InchiFlag::OutErrInChI => "OutErrINCHI",
            InchiFlag::Timeout => "W",
            InchiFlag::TimeoutMs => "WM",
            InchiFlag::RawOption => "",
            other => other.name(),
        }
    }

    pub fn arity(self) -> ArgKind {
        match self {
            InchiFlag::Timeout | InchiFlag::TimeoutMs => ArgKind::Integer,
            InchiFlag::RawOption => ArgKind::String,
            _ => ArgKind::Switch,
        }
    }

    pub fn group(self) -> Option<ExclusionGroup> {
        match self {
            InchiFlag::SNon | InchiFlag::SRel | InchiFlag::SRac | InchiFlag::SUCF => {
                Some(ExclusionGroup::StereoInterpretation)
            }
            InchiFlag::ChiralFlagON | InchiFlag::ChiralFlagOFF => Some(ExclusionGroup::ChiralFlag),
            InchiFlag::Polymers | InchiFlag::Polymers105 => Some(ExclusionGroup::PolymerMode),
            InchiFlag::Timeout | InchiFlag::TimeoutMs => Some(ExclusionGroup::Timeout),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            InchiFlag::SNon => "Exclude stereo",
            InchiFlag::SRel => "Relative stereo",
            InchiFlag::SRac => "Racemic stereo",
            InchiFlag::SUCF => "Use the chiral flag to choose absolute or relative stereo",
            InchiFlag::SUU => "Always indicate unknown/undefined stereo",
            InchiFlag::SLUUD => "Different labels for unknown and undefined stereo",
            InchiFlag::ChiralFlagON => "Set the chiral flag",
            InchiFlag::ChiralFlagOFF => "Clear the chiral flag",
            InchiFlag::RecMet => "Include reconnected metals layer",
            InchiFlag::FixedH => "Include fixed hydrogen layer",
            InchiFlag::KET => "Account for keto-enol tautomerism",
            InchiFlag::OneFiveT => "Account for 1,5-tautomerism",
            InchiFlag::NPZz => "Allow non-polymer Zz pseudo element atoms",
            InchiFlag::SAtZz => "Allow stereo at atoms connected to Zz",
            InchiFlag::Polymers => "Process polymer data",
            InchiFlag::Polymers105 => "Process polymers with the 1.05 rules",
            InchiFlag::FoldCRU => "Fold constitutional repeating units",
            InchiFlag::NoFrameShift => "Disable polymer CRU frame shift",
            InchiFlag::NoEdits => "Disable polymer source-based edits",
            InchiFlag::LargeMolecules => "Allow molecules of up to 32766 atoms",
            InchiFlag::AuxNone => "Omit auxiliary information",
            InchiFlag::WarnOnEmptyStructure => "Warn rather than fail on an empty structure",
            InchiFlag::SaveOpt => "Save custom InChI creation options",
            InchiFlag::OutErrInChI => "Emit an empty InChI when an error occurs",
            InchiFlag::Timeout => "Timeout per structure in seconds",
            InchiFlag::TimeoutMs => "Timeout per structure in milliseconds",
            InchiFlag::RawOption => "Verbatim native switch not known to the registry",
        }
    }

    /// Posición en el orden canónico.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for InchiFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for InchiFlag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}

// Nombre y token en minúsculas -> flag. Se construye una única vez.
static REGISTRY: Lazy<HashMap<String, InchiFlag>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(InchiFlag::ALL.len() * 2);
    for flag in InchiFlag::ALL {
        map.insert(flag.name().to_ascii_lowercase(), flag);
        if !flag.token().is_empty() {
            map.entry(flag.token().to_ascii_lowercase()).or_insert(flag);
        }
    }
    map
});

/// Busca un flag por nombre simbólico o token nativo (sin distinguir
/// mayúsculas). Acepta un prefijo de opción (`-` o `/`) delante.
pub fn lookup(name: &str) -> Result<InchiFlag, CoreError> {
    let key = name.trim().trim_start_matches(['-', '/']).to_ascii_lowercase();
    REGISTRY.get(&key).copied().ok_or_else(|| CoreError::UnknownFlag(name.to_string()))
}
