//! Ida y vuelta completa: validar, serializar, marshaling, llamada nativa
//! bajo el lock global y decodificación.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use inchi_core::{serialize, Options};
use inchi_domain::{validate, InchiResult, InchiStatus, MoleculeRequest, ResponseDecoder};
use log::{debug, log_enabled, warn, Level};

use crate::backend::NativeInchi;
use crate::library::DynamicLibrary;
use crate::marshal::NativeInput;
use crate::EngineError;

/// La librería InChI no es reentrante: una sola llamada en vuelo por proceso,
/// sea cual sea el motor o el backend.
static NATIVE_CALL_LOCK: Mutex<()> = Mutex::new(());

#[derive(Debug)]
pub struct InchiEngine<B: NativeInchi> {
    backend: B,
}

impl InchiEngine<DynamicLibrary> {
    /// Carga la librería compartida desde `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        Ok(Self::new(DynamicLibrary::open(path)?))
    }
}

impl<B: NativeInchi> InchiEngine<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Genera el InChI de `request`. Los errores de validación y de marshaling
    /// se devuelven antes de tocar la librería; ERROR y WARNING nativos son
    /// valores de `InchiResult`.
    pub fn to_inchi(&self, request: &MoleculeRequest, options: &Options) -> Result<InchiResult, EngineError> {
        validate(request, options)?;
        let option_string = serialize(options);
        let mut input = NativeInput::marshal(request, &option_string)?;

        if log_enabled!(Level::Debug) {
            let hash = request.content_hash().unwrap_or_else(|e| format!("<sin hash: {e}>"));
            debug!("GetINCHIEx: {request} opciones=\"{option_string}\" hash={hash}");
        }

        let raw = {
            // Un panic en otro hilo no deja estado que proteger: el mutex guarda `()`.
            let _guard = NATIVE_CALL_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            self.backend.generate(&mut input)?
        };

        let result = ResponseDecoder::new(options).decode(raw);
        match result.status() {
            InchiStatus::Success => debug!("GetINCHIEx terminó con código {}", result.return_code()),
            InchiStatus::Warning | InchiStatus::Error => {
                warn!("GetINCHIEx devolvió {} (código {}): {}",
                      result.status(),
                      result.return_code(),
                      result.message().unwrap_or(""))
            }
        }
        Ok(result)
    }
}
