// inchi-domain library entry point
pub mod atom;
pub mod bond;
pub mod decoder;
pub mod error;
pub mod extensions;
pub mod hashing;
pub mod request;
pub mod result;
pub mod stereo;
pub mod validation;

pub use atom::{Atom, IsotopicMass, Radical};
pub use bond::{Bond, BondOrder, BondStereo};
pub use decoder::{decode, RawResponse, ResponseDecoder};
pub use error::{RecordKind, ValidationError};
pub use extensions::{HapticBond, Polymer, PolymerConnection, PolymerSubtype, PolymerUnit, PolymerUnitType, V3000Extension};
pub use request::MoleculeRequest;
pub use result::{InchiResult, InchiStatus, NativeReturnCode};
pub use stereo::{Stereo0D, StereoKind, StereoParity};
pub use validation::{validate, validate_with};
