//! Selección inmutable de opciones (`Options`) y su builder.
//!
//! `Options` sólo se crea desde `OptionsBuilder::build` (o vacía con
//! `Options::default()`), por lo que sus invariantes ya vienen validadas:
//! a lo sumo un flag por grupo de exclusión y argumentos bien formados.

pub mod builder;
pub mod serializer;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flags::InchiFlag;
use crate::hashing;

pub use builder::OptionsBuilder;

/// Argumento de un flag con valor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Integer(v) => write!(f, "{v}"),
            FlagValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FlagValue {
    fn from(v: i64) -> Self {
        FlagValue::Integer(v)
    }
}

impl From<i32> for FlagValue {
    fn from(v: i32) -> Self {
        FlagValue::Integer(i64::from(v))
    }
}

impl From<u32> for FlagValue {
    fn from(v: u32) -> Self {
        FlagValue::Integer(i64::from(v))
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        FlagValue::Text(s.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(s: String) -> Self {
        FlagValue::Text(s)
    }
}

/// Snapshot inmutable de flags seleccionados.
///
/// El `BTreeMap` ordena por `InchiFlag`, es decir, por el orden canónico del
/// registro; dos selecciones lógicamente iguales son iguales con
/// independencia del orden en que se agregaron.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Options {
    selected: BTreeMap<InchiFlag, Option<FlagValue>>,
}

impl Options {
    pub(crate) fn from_selection(selected: BTreeMap<InchiFlag, Option<FlagValue>>) -> Self {
        Options { selected }
    }

    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    pub fn contains(&self, flag: InchiFlag) -> bool {
        self.selected.contains_key(&flag)
    }

    /// Argumento de un flag con valor, si está seleccionado.
    pub fn value(&self, flag: InchiFlag) -> Option<&FlagValue> {
        self.selected.get(&flag).and_then(Option::as_ref)
    }

    /// Flags seleccionados en orden canónico.
    pub fn flags(&self) -> impl Iterator<Item = InchiFlag> + '_ {
        self.selected.keys().copied()
    }

    /// Pares (flag, argumento) en orden canónico.
    pub fn entries(&self) -> impl Iterator<Item = (InchiFlag, Option<&FlagValue>)> + '_ {
        self.selected.iter().map(|(flag, value)| (*flag, value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn large_molecules(&self) -> bool {
        self.contains(InchiFlag::LargeMolecules)
    }

    pub fn aux_suppressed(&self) -> bool {
        self.contains(InchiFlag::AuxNone)
    }

    pub fn emits_inchi_on_error(&self) -> bool {
        self.contains(InchiFlag::OutErrInChI)
    }

    /// Cadena de opciones con el prefijo de la plataforma actual.
    pub fn to_option_string(&self) -> String {
        serializer::serialize(self)
    }

    /// Hash estable (blake3, hex) de la selección, igual en todas las
    /// plataformas.
    pub fn fingerprint(&self) -> String {
        hashing::options_fingerprint(self)
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_option_string())
    }
}
