//! Fingerprint de opciones – abstracción para poder cambiar de algoritmo sin
//! tocar el resto del crate.

use blake3::Hasher;

use crate::options::serializer::{serialize_with, OptionPrefix};
use crate::options::Options;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hash de la cadena canónica con prefijo fijo, para que el fingerprint no
/// dependa de la plataforma.
pub fn options_fingerprint(options: &Options) -> String {
    hash_str(&serialize_with(options, OptionPrefix::Dash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::InchiFlag;
    use crate::options::OptionsBuilder;

    #[test]
    fn fingerprint_is_hex_64() {
        assert_eq!(Options::default().fingerprint().len(), 64);
    }

    #[test]
    fn fingerprint_tracks_selection() {
        let mut b = OptionsBuilder::new();
        let empty = b.build().fingerprint();
        b.with_switch(InchiFlag::FixedH).unwrap();
        assert_ne!(empty, b.build().fingerprint());
    }
}
