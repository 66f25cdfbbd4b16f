use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use inchi_core::{InchiFlag, Options, OptionsBuilder};
use inchi_domain::{Atom, Bond, BondOrder, BondStereo, InchiStatus, MoleculeRequest, RawResponse, RecordKind,
                   ValidationError};
use inchi_engine::ffi::MAXVAL;
use inchi_engine::{EngineError, InchiEngine, NativeInchi, NativeInput};

/// Backend guionizado: registra lo que recibe y mide la concurrencia.
#[derive(Default)]
struct Scripted {
    status: i32,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    seen_options: Mutex<Vec<String>>,
    seen_atoms: Mutex<Vec<usize>>,
}

impl Scripted {
    fn with_status(status: i32) -> Self {
        Scripted { status, ..Scripted::default() }
    }
}

impl NativeInchi for Scripted {
    fn generate(&self, input: &mut NativeInput) -> Result<RawResponse, EngineError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_options.lock().unwrap().push(input.options().to_string_lossy().into_owned());
        self.seen_atoms.lock().unwrap().push(input.atoms().len());
        thread::sleep(Duration::from_millis(2));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(RawResponse { status: self.status,
                         inchi: Some("InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3".into()),
                         aux_info: Some("AuxInfo=1/0/N:1,2,3".into()),
                         message: None,
                         log: Some(String::new()) })
    }
}

fn ethanol() -> MoleculeRequest {
    let mut req = MoleculeRequest::new();
    let c1 = req.add_atom(Atom::new("C"));
    let c2 = req.add_atom(Atom::new("C"));
    let o = req.add_atom(Atom::new("O"));
    req.connect(c1, c2, BondOrder::Single);
    req.connect(c2, o, BondOrder::Single);
    req
}

fn options(flags: &[InchiFlag]) -> Options {
    let mut b = OptionsBuilder::new();
    b.with_flags(flags.iter().copied()).unwrap();
    b.build()
}

#[test]
fn round_trip_passes_serialized_options() {
    let engine = InchiEngine::new(Scripted::default());
    let result = engine.to_inchi(&ethanol(), &options(&[InchiFlag::FixedH, InchiFlag::RecMet])).unwrap();
    assert_eq!(result.status(), InchiStatus::Success);
    assert_eq!(result.inchi(), Some("InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3"));
    assert_eq!(result.log(), Some(""));

    let seen = engine.backend().seen_options.lock().unwrap().clone();
    let prefix = if cfg!(windows) { "/" } else { "-" };
    assert_eq!(seen, vec![format!("{prefix}RecMet {prefix}FixedH")]);
    assert_eq!(*engine.backend().seen_atoms.lock().unwrap(), vec![3]);
}

#[test]
fn aux_none_hides_aux_info() {
    let engine = InchiEngine::new(Scripted::default());
    let result = engine.to_inchi(&ethanol(), &options(&[InchiFlag::AuxNone])).unwrap();
    assert_eq!(result.aux_info(), None);
}

#[test]
fn native_error_is_a_result_value() {
    let engine = InchiEngine::new(Scripted::with_status(2));
    let result = engine.to_inchi(&ethanol(), &Options::default()).unwrap();
    assert_eq!(result.status(), InchiStatus::Error);
    assert_eq!(result.inchi(), None);

    let result = engine.to_inchi(&ethanol(), &options(&[InchiFlag::OutErrInChI])).unwrap();
    assert_eq!(result.inchi(), Some("InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3"));
}

#[test]
fn validation_errors_never_reach_the_library() {
    let engine = InchiEngine::new(Scripted::default());
    let mut req = ethanol();
    req.connect(0, 7, BondOrder::Double);
    let err = engine.to_inchi(&req, &Options::default()).unwrap_err();
    assert!(matches!(err,
                     EngineError::Validation(ValidationError::DanglingReference { record: RecordKind::Bond,
                                                                                  index: 2,
                                                                                  atom: 7,
                                                                                  .. })));
    assert_eq!(engine.backend().calls.load(Ordering::SeqCst), 0);
}

#[test]
fn large_molecules_still_bounded_by_native_width() {
    let mut req = MoleculeRequest::new();
    for _ in 0..=i16::MAX as usize {
        req.add_atom(Atom::new("C"));
    }
    let engine = InchiEngine::new(Scripted::default());

    let err = engine.to_inchi(&req, &Options::default()).unwrap_err();
    assert!(matches!(err, EngineError::Validation(ValidationError::StructureTooLarge { .. })));

    let err = engine.to_inchi(&req, &options(&[InchiFlag::LargeMolecules])).unwrap_err();
    assert!(matches!(err,
                     EngineError::Validation(ValidationError::StructureTooLarge { record: RecordKind::Atom,
                                                                                  count: 32768,
                                                                                  .. })));
    assert_eq!(engine.backend().calls.load(Ordering::SeqCst), 0);
}

#[test]
fn native_calls_never_overlap() {
    let engine = Arc::new(InchiEngine::new(Scripted::default()));
    let handles: Vec<_> = (0..8).map(|_| {
                                    let engine = Arc::clone(&engine);
                                    thread::spawn(move || {
                                        for _ in 0..5 {
                                            engine.to_inchi(&ethanol(), &Options::default()).unwrap();
                                        }
                                    })
                                })
                                .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(engine.backend().calls.load(Ordering::SeqCst), 40);
    assert_eq!(engine.backend().max_in_flight.load(Ordering::SeqCst), 1);
}

#[test]
fn crowded_atom_spills_to_the_other_end() {
    let mut req = MoleculeRequest::new();
    let hub = req.add_atom(Atom::new("C"));
    for _ in 0..=MAXVAL {
        let leaf = req.add_atom(Atom::new("H"));
        req.add_bond(Bond::new(hub, leaf, BondOrder::Single).with_stereo(BondStereo::SingleUp));
    }
    let input = NativeInput::marshal(&req, "").unwrap();
    let atoms = input.atoms();
    assert_eq!(atoms[hub].num_bonds as usize, MAXVAL);
    assert!(atoms[hub].bond_stereo.iter().all(|s| *s == 1));

    let last = MAXVAL + 1;
    assert_eq!(atoms[last].num_bonds, 1);
    assert_eq!(atoms[last].neighbor[0], hub as i16);
    assert_eq!(atoms[last].bond_stereo[0], -1);
}

#[test]
fn bond_between_two_full_atoms_is_rejected() {
    let mut req = MoleculeRequest::new();
    let a = req.add_atom(Atom::new("C"));
    let b = req.add_atom(Atom::new("C"));
    for owner in [a, b] {
        for _ in 0..MAXVAL {
            let leaf = req.add_atom(Atom::new("H"));
            req.connect(owner, leaf, BondOrder::Single);
        }
    }
    req.connect(a, b, BondOrder::Single);
    let err = NativeInput::marshal(&req, "").unwrap_err();
    assert!(matches!(err,
                     EngineError::Validation(ValidationError::OutOfRange { record: RecordKind::Bond,
                                                                           index: 40,
                                                                           field: "num_bonds",
                                                                           .. })));
}
