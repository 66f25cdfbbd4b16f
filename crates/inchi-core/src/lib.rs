//! inchi-core: sistema tipado de opciones para la llamada nativa de InChI.
//!
//! - `flags`: registro estático de flags reconocidos (`InchiFlag`, `lookup`).
//! - `options`: builder con validación, snapshot inmutable `Options` y
//!   serializador a la cadena de opciones que espera la librería nativa.
//! - `hashing`: fingerprint estable de una selección de opciones.
pub mod constants;
pub mod errors;
pub mod flags;
pub mod hashing;
pub mod options;

pub use errors::CoreError;
pub use flags::{lookup, ArgKind, ExclusionGroup, InchiFlag};
pub use options::serializer::{serialize, serialize_with, OptionPrefix};
pub use options::{FlagValue, Options, OptionsBuilder};
