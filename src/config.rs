//! Configuración desde el entorno (.env incluido).
//!
//! Variables:
//! - `INCHI_LIBRARY_PATH`: ruta de la librería compartida; por defecto el
//!   nombre de plataforma (`libinchi.so`, `inchi.dll`, ...).
//! - `INCHI_DEFAULT_FLAGS`: flags separados por espacios o comas; los que
//!   llevan argumento como `Nombre=valor` (`W=30`).
//! - `INCHI_TIMEOUT_SECS`: timeout por estructura en segundos.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use inchi_core::{Options, OptionsBuilder};
use inchi_engine::{default_library_name, DynamicLibrary, InchiEngine};
use once_cell::sync::Lazy;

use crate::errors::InchiError;

pub const LIBRARY_PATH_VAR: &str = "INCHI_LIBRARY_PATH";
pub const DEFAULT_FLAGS_VAR: &str = "INCHI_DEFAULT_FLAGS";
pub const TIMEOUT_SECS_VAR: &str = "INCHI_TIMEOUT_SECS";

/// `.env` se lee una sola vez por proceso.
static DOTENV: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
});

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub library_path: PathBuf,
    /// Opciones por defecto ya validadas.
    pub default_options: Options,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InchiError> {
        Lazy::force(&DOTENV);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de `get`.
    pub fn from_lookup<F>(get: F) -> Result<Self, InchiError>
        where F: Fn(&str) -> Option<String>
    {
        let library_path = get(LIBRARY_PATH_VAR).filter(|p| !p.trim().is_empty())
                                                .map(PathBuf::from)
                                                .unwrap_or_else(|| PathBuf::from(default_library_name()));

        let mut builder = OptionsBuilder::new();
        if let Some(flags) = get(DEFAULT_FLAGS_VAR) {
            for spec in flags.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty()) {
                builder.with_spec(spec).map_err(|e| InchiError::Config(format!("{DEFAULT_FLAGS_VAR}: {e}")))?;
            }
        }
        if let Some(secs) = get(TIMEOUT_SECS_VAR) {
            let secs = secs.trim()
                           .parse::<u64>()
                           .map_err(|_| InchiError::Config(format!("{TIMEOUT_SECS_VAR}: not a number of seconds: {secs:?}")))?;
            builder.with_timeout(Duration::from_secs(secs))
                   .map_err(|e| InchiError::Config(format!("{TIMEOUT_SECS_VAR}: {e}")))?;
        }

        Ok(AppConfig { library_path, default_options: builder.build() })
    }

    /// Builder que parte de las opciones por defecto.
    pub fn options_builder(&self) -> OptionsBuilder {
        OptionsBuilder::from(&self.default_options)
    }

    pub fn load_engine(&self) -> Result<InchiEngine<DynamicLibrary>, InchiError> {
        Ok(InchiEngine::load(&self.library_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inchi_core::{FlagValue, InchiFlag};
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.default_options.is_empty());
        assert_eq!(config.library_path, PathBuf::from(default_library_name()));
    }

    #[test]
    fn flags_and_timeout_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[(LIBRARY_PATH_VAR, "/opt/inchi/libinchi.so.1"),
                                                     (DEFAULT_FLAGS_VAR, "FixedH, RecMet  AuxNone"),
                                                     (TIMEOUT_SECS_VAR, "30")])).unwrap();
        assert_eq!(config.library_path, PathBuf::from("/opt/inchi/libinchi.so.1"));
        let options = &config.default_options;
        assert!(options.contains(InchiFlag::FixedH));
        assert!(options.contains(InchiFlag::RecMet));
        assert!(options.aux_suppressed());
        assert_eq!(options.value(InchiFlag::Timeout), Some(&FlagValue::Integer(30)));
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = AppConfig::from_lookup(lookup(&[(DEFAULT_FLAGS_VAR, "FixedH Bogus")])).unwrap_err();
        assert!(matches!(err, InchiError::Config(ref msg) if msg.contains("Bogus")));
        let err = AppConfig::from_lookup(lookup(&[(TIMEOUT_SECS_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, InchiError::Config(_)));
        let config = AppConfig::from_lookup(lookup(&[(DEFAULT_FLAGS_VAR, "W=5"), (TIMEOUT_SECS_VAR, "5")])).unwrap();
        assert_eq!(config.default_options.value(InchiFlag::Timeout), Some(&FlagValue::Integer(5)));
    }

    #[test]
    fn conflicting_defaults_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(DEFAULT_FLAGS_VAR, "SRel SRac")])).unwrap_err();
        assert!(matches!(err, InchiError::Config(ref msg) if msg.contains("SRac")));
    }
}
