use inchi_core::constants::MAX_STANDARD_ATOMS;
use inchi_core::{serialize_with, InchiFlag, OptionPrefix, Options, OptionsBuilder};
use inchi_domain::{decode, validate, Atom, BondOrder, InchiStatus, MoleculeRequest, RecordKind, Stereo0D, StereoParity,
                   ValidationError};

fn chain(len: usize) -> MoleculeRequest {
    let mut req = MoleculeRequest::new();
    for i in 0..len {
        let idx = req.add_atom(Atom::new("C"));
        if i > 0 {
            req.connect(idx - 1, idx, BondOrder::Single);
        }
    }
    req
}

fn options(flags: &[InchiFlag]) -> Options {
    let mut b = OptionsBuilder::new();
    b.with_flags(flags.iter().copied()).unwrap();
    b.build()
}

#[test]
fn oversized_structure_needs_large_molecules() {
    let req = chain(MAX_STANDARD_ATOMS + 1);
    assert_eq!(validate(&req, &Options::default()),
               Err(ValidationError::StructureTooLarge { record: RecordKind::Atom,
                                                        count: MAX_STANDARD_ATOMS + 1,
                                                        limit: MAX_STANDARD_ATOMS }));
    assert_eq!(validate(&req, &options(&[InchiFlag::LargeMolecules])), Ok(()));
}

#[test]
fn too_many_stereo_elements_need_large_molecules() {
    let mut req = chain(5);
    for _ in 0..=MAX_STANDARD_ATOMS {
        req.add_stereo(Stereo0D::tetrahedral(1, [0, 2, 3, 4], StereoParity::Odd));
    }
    assert_eq!(validate(&req, &Options::default()),
               Err(ValidationError::StructureTooLarge { record: RecordKind::Stereo,
                                                        count: MAX_STANDARD_ATOMS + 1,
                                                        limit: MAX_STANDARD_ATOMS }));
    assert_eq!(validate(&req, &options(&[InchiFlag::LargeMolecules])), Ok(()));
}

#[test]
fn structure_at_the_limit_passes() {
    let req = chain(MAX_STANDARD_ATOMS);
    assert_eq!(validate(&req, &Options::default()), Ok(()));
}

#[test]
fn large_molecules_does_not_relax_references() {
    let mut req = chain(3);
    req.connect(2, 3, BondOrder::Single);
    let err = validate(&req, &options(&[InchiFlag::LargeMolecules])).unwrap_err();
    assert_eq!(err, ValidationError::DanglingReference { record: RecordKind::Bond, index: 2, atom: 3, atom_count: 3 });
}

#[test]
fn aux_none_end_to_end() {
    let opts = options(&[InchiFlag::AuxNone]);
    assert_eq!(serialize_with(&opts, OptionPrefix::Dash), "-AuxNone");
    let result = decode(0, Some("InChI=1S/CH4/h1H4"), Some(""), None, &opts);
    assert_eq!(result.status(), InchiStatus::Success);
    assert_eq!(result.aux_info(), None);
}

#[test]
fn error_without_always_emit_has_no_inchi() {
    let result = decode(-3, Some("InChI=1S//"), None, Some("Error"), &Options::default());
    assert_eq!(result.status(), InchiStatus::Error);
    assert_eq!(result.inchi(), None);
}

#[test]
fn success_round_trip_keeps_inchi() {
    let text = "InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3";
    let result = decode(0, Some(text), None, None, &Options::default());
    assert!(result.is_success());
    assert_eq!(result.inchi(), Some(text));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bond_past_the_last_atom_is_dangling(atoms in 1usize..40, overshoot in 0usize..10, from_start in any::<bool>()) {
            let mut req = chain(atoms);
            let bad = atoms + overshoot;
            if from_start {
                req.connect(bad, 0, BondOrder::Single);
            } else {
                req.connect(0, bad, BondOrder::Double);
            }
            let err = validate(&req, &Options::default()).unwrap_err();
            prop_assert_eq!(err, ValidationError::DanglingReference { record: RecordKind::Bond,
                                                                     index: atoms - 1,
                                                                     atom: bad,
                                                                     atom_count: atoms });
        }
    }
}
