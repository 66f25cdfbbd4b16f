//! Decodificación de la salida cruda de la llamada nativa.
//!
//! - Estado: tabla cerrada de `InchiStatus::from_code`.
//! - En ERROR el InChI se descarta, salvo que `OutErrInChI` esté
//!   seleccionado: entonces se devuelve el texto nativo o, si no hay, la raíz
//!   sin estructura `InChI=1S//` (comportamiento observado de la librería).
//! - Con `AuxNone` la AuxInfo es siempre `None`.
//! - Texto nulo del lado nativo es `None`; texto presente pero vacío es
//!   `Some("")`, para distinguir "no pedido" de "pedido pero vacío".

use inchi_core::constants::EMPTY_STRUCTURE_INCHI;
use inchi_core::Options;
use serde::{Deserialize, Serialize};

use crate::result::{InchiResult, InchiStatus};

/// Salida tal como la entrega la frontera nativa, ya copiada a memoria Rust.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub status: i32,
    pub inchi: Option<String>,
    pub aux_info: Option<String>,
    pub message: Option<String>,
    pub log: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ResponseDecoder {
    aux_suppressed: bool,
    inchi_on_error: bool,
}

impl ResponseDecoder {
    pub fn new(options: &Options) -> Self {
        ResponseDecoder { aux_suppressed: options.aux_suppressed(),
                          inchi_on_error: options.emits_inchi_on_error() }
    }

    pub fn decode(&self, raw: RawResponse) -> InchiResult {
        let status = InchiStatus::from_code(raw.status);
        let inchi = match status {
            InchiStatus::Error if self.inchi_on_error => {
                Some(raw.inchi.filter(|s| !s.is_empty()).unwrap_or_else(|| EMPTY_STRUCTURE_INCHI.to_string()))
            }
            InchiStatus::Error => None,
            InchiStatus::Success | InchiStatus::Warning => raw.inchi,
        };
        let aux_info = if self.aux_suppressed { None } else { raw.aux_info };
        InchiResult::new(status, raw.status, inchi, aux_info, raw.message, raw.log)
    }
}

/// Forma plana: estado, InChI, AuxInfo y log.
pub fn decode(status: i32,
              inchi: Option<&str>,
              aux_info: Option<&str>,
              log: Option<&str>,
              options: &Options)
              -> InchiResult {
    let raw = RawResponse { status,
                            inchi: inchi.map(str::to_string),
                            aux_info: aux_info.map(str::to_string),
                            message: None,
                            log: log.map(str::to_string) };
    ResponseDecoder::new(options).decode(raw)
}
