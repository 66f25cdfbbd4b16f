use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado de una generación, tal como lo ve el llamador. ERROR y WARNING
/// son resultados normales, no errores de Rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InchiStatus {
    Success,
    Warning,
    Error,
}

impl InchiStatus {
    /// Tabla cerrada: 0 éxito, 1 advertencia, cualquier otro valor error.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => InchiStatus::Success,
            1 => InchiStatus::Warning,
            _ => InchiStatus::Error,
        }
    }
}

impl fmt::Display for InchiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InchiStatus::Success => "SUCCESS",
            InchiStatus::Warning => "WARNING",
            InchiStatus::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// Tabla completa de códigos de retorno de la librería, sólo para
/// diagnóstico; el estado público es `InchiStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeReturnCode {
    Skip,
    Eof,
    Okay,
    Warning,
    Error,
    Fatal,
    Unknown,
    Busy,
    Other(i32),
}

impl NativeReturnCode {
    pub fn from_code(code: i32) -> Self {
        match code {
            -2 => NativeReturnCode::Skip,
            -1 => NativeReturnCode::Eof,
            0 => NativeReturnCode::Okay,
            1 => NativeReturnCode::Warning,
            2 => NativeReturnCode::Error,
            3 => NativeReturnCode::Fatal,
            4 => NativeReturnCode::Unknown,
            5 => NativeReturnCode::Busy,
            other => NativeReturnCode::Other(other),
        }
    }
}

/// Resultado decodificado de una llamada nativa. Inmutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InchiResult {
    status: InchiStatus,
    return_code: i32,
    inchi: Option<String>,
    aux_info: Option<String>,
    message: Option<String>,
    log: Option<String>,
}

impl InchiResult {
    pub(crate) fn new(status: InchiStatus,
                      return_code: i32,
                      inchi: Option<String>,
                      aux_info: Option<String>,
                      message: Option<String>,
                      log: Option<String>)
                      -> Self {
        InchiResult { status, return_code, inchi, aux_info, message, log }
    }

    pub fn status(&self) -> InchiStatus {
        self.status
    }

    pub fn return_code(&self) -> i32 {
        self.return_code
    }

    pub fn native_code(&self) -> NativeReturnCode {
        NativeReturnCode::from_code(self.return_code)
    }

    pub fn inchi(&self) -> Option<&str> {
        self.inchi.as_deref()
    }

    pub fn aux_info(&self) -> Option<&str> {
        self.aux_info.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn log(&self) -> Option<&str> {
        self.log.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == InchiStatus::Success
    }
}

impl fmt::Display for InchiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.inchi, &self.message) {
            (Some(inchi), _) => write!(f, "{}: {}", self.status, inchi),
            (None, Some(msg)) => write!(f, "{}: {}", self.status, msg),
            (None, None) => write!(f, "{} (code {})", self.status, self.return_code),
        }
    }
}
