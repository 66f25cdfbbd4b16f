use inchi_core::CoreError;
use inchi_domain::ValidationError;
use inchi_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InchiError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<CoreError> for InchiError {
    fn from(err: CoreError) -> Self {
        InchiError::Engine(err.into())
    }
}

impl From<ValidationError> for InchiError {
    fn from(err: ValidationError) -> Self {
        InchiError::Engine(err.into())
    }
}
