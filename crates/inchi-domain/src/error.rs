// error.rs
use std::fmt;

use thiserror::Error;

/// Tipo de registro de la petición al que apunta un error de validación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Atom,
    Bond,
    Stereo,
    PolymerUnit,
    V3000,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::Atom => "atom",
            RecordKind::Bond => "bond",
            RecordKind::Stereo => "stereo element",
            RecordKind::PolymerUnit => "polymer unit",
            RecordKind::V3000 => "v3000 entry",
        };
        f.write_str(s)
    }
}

/// Errores de validación de una `MoleculeRequest`. Todos se detectan antes
/// de cualquier llamada nativa y nombran el índice culpable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("too many {record}s: {count} exceeds the limit of {limit}")]
    StructureTooLarge { record: RecordKind, count: usize, limit: usize },

    #[error("{record} {index} references atom {atom}, but the structure has {atom_count} atoms")]
    DanglingReference {
        record: RecordKind,
        index: usize,
        atom: usize,
        atom_count: usize,
    },

    #[error("{record} {index}: {field} = {value} is out of range")]
    OutOfRange {
        record: RecordKind,
        index: usize,
        field: &'static str,
        value: String,
    },
}

impl ValidationError {
    pub(crate) fn out_of_range(record: RecordKind, index: usize, field: &'static str, value: impl fmt::Display) -> Self {
        ValidationError::OutOfRange { record, index, field, value: value.to_string() }
    }
}
