//! Serialización de `Options` a la cadena que recibe `szOptions`.
//!
//! Formato: tokens separados por un único espacio. Cada flag se emite como
//! `<prefijo><token>`; los flags con valor agregan un espacio y el argumento.
//! El orden es siempre el canónico del registro, nunca el de inserción.

use std::fmt::Write;

use crate::flags::InchiFlag;
use crate::options::Options;

/// Prefijo de opción de la librería nativa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionPrefix {
    /// `-`, convención en Unix.
    Dash,
    /// `/`, convención en Windows.
    Slash,
}

impl OptionPrefix {
    pub fn platform() -> Self {
        if cfg!(windows) {
            OptionPrefix::Slash
        } else {
            OptionPrefix::Dash
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionPrefix::Dash => '-',
            OptionPrefix::Slash => '/',
        }
    }
}

/// Serializa con el prefijo de la plataforma.
pub fn serialize(options: &Options) -> String {
    serialize_with(options, OptionPrefix::platform())
}

pub fn serialize_with(options: &Options, prefix: OptionPrefix) -> String {
    let mut out = String::new();
    for (flag, value) in options.entries() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(prefix.as_char());
        out.push_str(flag.token());
        if let Some(value) = value {
            // RawOption no tiene token: el argumento es el token
            if flag != InchiFlag::RawOption {
                out.push(' ');
            }
            // escribir en un String no falla
            let _ = write!(out, "{value}");
        }
    }
    out
}
