use inchi_domain::RawResponse;

use crate::marshal::NativeInput;
use crate::EngineError;

/// Frontera de la llamada nativa. `InchiEngine` la invoca siempre bajo el
/// lock global, así que una implementación no necesita sincronizarse.
///
/// Además de `DynamicLibrary`, los tests usan backends guionizados.
pub trait NativeInchi: Send + Sync {
    fn generate(&self, input: &mut NativeInput) -> Result<RawResponse, EngineError>;
}

impl<B: NativeInchi + ?Sized> NativeInchi for Box<B> {
    fn generate(&self, input: &mut NativeInput) -> Result<RawResponse, EngineError> {
        (**self).generate(input)
    }
}
