//! Backend sobre la librería compartida de InChI cargada en tiempo de
//! ejecución con `libloading`.

use std::ffi::{CStr, OsString};
use std::os::raw::c_char;
use std::path::{Path, PathBuf};

use inchi_domain::RawResponse;
use libloading::Library;
use log::{debug, warn};

use crate::backend::NativeInchi;
use crate::ffi::{inchi_Output, FreeINCHIFn, GetINCHIExFn, FREE_INCHI_SYMBOL, GET_INCHI_EX_SYMBOL};
use crate::marshal::NativeInput;
use crate::EngineError;

/// Nombre del archivo de la librería en la plataforma actual
/// (`libinchi.so`, `libinchi.dylib`, `inchi.dll`).
pub fn default_library_name() -> OsString {
    libloading::library_filename("inchi")
}

pub struct DynamicLibrary {
    get_inchi: GetINCHIExFn,
    free_inchi: FreeINCHIFn,
    path: PathBuf,
    // Mantiene vivos los punteros a función de arriba.
    _library: Library,
}

impl DynamicLibrary {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        // SAFETY: cargar la librería ejecuta sus inicializadores; se asume que
        // es una build oficial de InChI.
        let library = unsafe { Library::new(path) }.map_err(|e| load_failure(path, e))?;
        let (get_inchi, free_inchi) = {
            // SAFETY: las firmas coinciden con inchi_api.h.
            let get = unsafe { library.get::<GetINCHIExFn>(GET_INCHI_EX_SYMBOL) }.map_err(|e| missing_symbol(path, "GetINCHIEx", e))?;
            let free = unsafe { library.get::<FreeINCHIFn>(FREE_INCHI_SYMBOL) }.map_err(|e| missing_symbol(path, "FreeINCHI", e))?;
            (*get, *free)
        };
        debug!("librería InChI cargada desde {}", path.display());
        Ok(DynamicLibrary { get_inchi, free_inchi, path: path.to_path_buf(), _library: library })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for DynamicLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicLibrary").field("path", &self.path).finish_non_exhaustive()
    }
}

fn load_failure(path: &Path, err: libloading::Error) -> EngineError {
    warn!("no se pudo cargar {}: {err}", path.display());
    EngineError::NativeCallFailure(format!("cannot load {}: {err}", path.display()))
}

fn missing_symbol(path: &Path, symbol: &str, err: libloading::Error) -> EngineError {
    warn!("{} no exporta {symbol}: {err}", path.display());
    EngineError::NativeCallFailure(format!("{symbol} not found in {}: {err}", path.display()))
}

/// Copia un texto nativo. Puntero nulo es `None`.
///
/// # Safety
/// `ptr` debe ser nulo o apuntar a una cadena terminada en NUL.
unsafe fn copy_text(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

impl NativeInchi for DynamicLibrary {
    fn generate(&self, input: &mut NativeInput) -> Result<RawResponse, EngineError> {
        let mut raw = input.as_raw();
        let mut out = inchi_Output::default();
        // SAFETY: `raw` apunta a buffers de `input`, vivos durante toda la
        // llamada; `out` se libera con FreeINCHI tras copiar los textos.
        let response = unsafe {
            let status = (self.get_inchi)(&mut raw, &mut out);
            let response = RawResponse { status,
                                         inchi: copy_text(out.szInChI),
                                         aux_info: copy_text(out.szAuxInfo),
                                         message: copy_text(out.szMessage),
                                         log: copy_text(out.szLog) };
            (self.free_inchi)(&mut out);
            response
        };
        Ok(response)
    }
}
