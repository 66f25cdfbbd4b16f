//! Constantes compartidas entre el builder, el validador y el marshaling.
//!
//! Los límites reflejan el ancho de los tipos de la API nativa (`AT_NUM` es
//! un `short` con signo). Cambiarlos sin cambiar la librería enlazada rompe
//! el contrato de memoria del lado nativo.

/// Máximo de átomos (y de elementos estereo 0D) representable en modo estándar.
pub const MAX_STANDARD_ATOMS: usize = i16::MAX as usize;

/// InChI raíz sin estructura que la librería emite con `OutErrInChI`.
pub const EMPTY_STRUCTURE_INCHI: &str = "InChI=1S//";
