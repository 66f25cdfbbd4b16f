//! inchi-rust: binding de la librería nativa de InChI.
//!
//! Reúne los crates del workspace detrás de una sola fachada:
//! - `inchi_core`: flags, builder de opciones y serializador.
//! - `inchi_domain`: petición molecular, validación y decodificación.
//! - `inchi_engine`: frontera nativa y motor.
//! - `config`: configuración desde el entorno; `errors`: error de alto nivel.
//!
//! `to_inchi` usa un motor de proceso cargado perezosamente desde
//! `AppConfig::from_env()`.

use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;

pub mod config;
pub mod errors;

pub use config::AppConfig;
pub use errors::InchiError;
pub use inchi_core::{lookup, serialize, serialize_with, CoreError, FlagValue, InchiFlag, OptionPrefix, Options,
                     OptionsBuilder};
pub use inchi_domain::{Atom, Bond, BondOrder, BondStereo, InchiResult, InchiStatus, MoleculeRequest, Stereo0D,
                       StereoParity, ValidationError};
pub use inchi_engine::{DynamicLibrary, EngineError, InchiEngine, NativeInchi};

static ENGINE: OnceCell<InchiEngine<DynamicLibrary>> = OnceCell::new();

/// Motor compartido, cargado la primera vez desde la configuración del entorno.
pub fn default_engine() -> Result<&'static InchiEngine<DynamicLibrary>, InchiError> {
    ENGINE.get_or_try_init(|| AppConfig::from_env()?.load_engine())
}

pub fn to_inchi(request: &MoleculeRequest, options: &Options) -> Result<InchiResult, InchiError> {
    Ok(default_engine()?.to_inchi(request, options)?)
}

/// Variante con flags en texto (`"FixedH"`, `"W=10"`), sin pasar por el builder.
pub fn to_inchi_with_flags(request: &MoleculeRequest, flags: &[&str]) -> Result<InchiResult, InchiError> {
    let options = options_from_specs(flags)?;
    to_inchi(request, &options)
}

pub fn options_from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Options, InchiError> {
    let mut builder = OptionsBuilder::new();
    for spec in specs {
        builder.with_spec(spec.as_ref())?;
    }
    Ok(builder.build())
}

/// Lee una `MoleculeRequest` en JSON.
pub fn read_request(path: impl AsRef<Path>) -> Result<MoleculeRequest, InchiError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
