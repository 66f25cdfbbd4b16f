//! Frontera nativa de InChI.
//!
//! `ffi` replica las estructuras de `inchi_api.h`, `marshal` copia una
//! `MoleculeRequest` a buffers propios, `library` carga la librería
//! compartida y `core::InchiEngine` hace la ida y vuelta serializando las
//! llamadas con un lock de proceso.

use inchi_core::CoreError;
use inchi_domain::ValidationError;
use thiserror::Error;

pub mod backend;
pub mod core;
pub mod ffi;
pub mod library;
pub mod marshal;

pub use crate::backend::NativeInchi;
pub use crate::core::InchiEngine;
pub use crate::library::{default_library_name, DynamicLibrary};
pub use crate::marshal::NativeInput;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Options(#[from] CoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("option string contains a NUL byte: {0:?}")]
    InvalidOptionString(String),
    #[error("native call failed: {0}")]
    NativeCallFailure(String),
}
