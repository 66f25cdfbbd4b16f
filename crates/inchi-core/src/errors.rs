//! Errores del sistema de opciones.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flags::{ExclusionGroup, InchiFlag};

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("invalid argument for {flag}: {reason}")]
    InvalidArgument { flag: InchiFlag, reason: String },
    #[error("{requested} conflicts with {selected} (group {group})")]
    ConflictingFlag {
        requested: InchiFlag,
        selected: InchiFlag,
        group: ExclusionGroup,
    },
}

impl CoreError {
    pub(crate) fn invalid(flag: InchiFlag, reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument { flag, reason: reason.into() }
    }
}
