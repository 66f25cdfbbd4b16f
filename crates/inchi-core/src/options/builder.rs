//! Builder de `Options`.
//!
//! Acumula flags en un estado mutable interno y sólo expone snapshots
//! validados. `build` clona el estado (copy-on-build): el builder sigue siendo
//! utilizable y los snapshots derivados conviven sin compartir estado.
//!
//! Reglas al agregar un flag:
//! - la aridad del argumento debe coincidir con la del registro;
//! - argumentos de texto no vacíos, sin espacios ni caracteres de control
//!   (la cadena nativa no tiene escape), enteros no negativos;
//! - si otro flag del mismo grupo de exclusión ya está seleccionado, se
//!   rechaza con `ConflictingFlag`. Volver a agregar el mismo flag reemplaza
//!   su argumento.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::errors::CoreError;
use crate::flags::{lookup, ArgKind, InchiFlag};
use crate::options::{FlagValue, Options};

#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    selected: BTreeMap<InchiFlag, Option<FlagValue>>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un flag con su argumento opcional.
    pub fn with_flag(&mut self, flag: InchiFlag, arg: Option<FlagValue>) -> Result<&mut Self, CoreError> {
        let arg = check_arity(flag, arg)?;
        if let Some(group) = flag.group() {
            if let Some(selected) = self.selected.keys().copied().find(|f| *f != flag && f.group() == Some(group)) {
                return Err(CoreError::ConflictingFlag { requested: flag, selected, group });
            }
        }
        self.selected.insert(flag, arg);
        Ok(self)
    }

    /// Agrega un interruptor sin argumento.
    pub fn with_switch(&mut self, flag: InchiFlag) -> Result<&mut Self, CoreError> {
        self.with_flag(flag, None)
    }

    /// Agrega varios interruptores; se detiene en el primer error dejando
    /// aplicados los anteriores.
    pub fn with_flags<I>(&mut self, flags: I) -> Result<&mut Self, CoreError>
        where I: IntoIterator<Item = InchiFlag>
    {
        for flag in flags {
            self.with_switch(flag)?;
        }
        Ok(self)
    }

    /// Timeout por estructura. Segundos enteros usan `W`, el resto `WM`.
    pub fn with_timeout(&mut self, timeout: Duration) -> Result<&mut Self, CoreError> {
        if timeout.subsec_millis() == 0 {
            let secs = i64::try_from(timeout.as_secs()).map_err(|_| CoreError::invalid(InchiFlag::Timeout, "timeout too large"))?;
            self.with_flag(InchiFlag::Timeout, Some(FlagValue::Integer(secs)))
        } else {
            let millis = i64::try_from(timeout.as_millis()).map_err(|_| CoreError::invalid(InchiFlag::TimeoutMs, "timeout too large"))?;
            self.with_flag(InchiFlag::TimeoutMs, Some(FlagValue::Integer(millis)))
        }
    }

    /// Agrega un flag escrito como texto: `FixedH`, `-SNon`, `W=10`,
    /// `RawOption=NEWPSOFF`. El nombre pasa por `lookup`.
    pub fn with_spec(&mut self, spec: &str) -> Result<&mut Self, CoreError> {
        let (name, arg) = match spec.split_once('=') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (spec, None),
        };
        let flag = lookup(name)?;
        let value = match (flag.arity(), arg) {
            (_, None) => None,
            (ArgKind::Integer, Some(arg)) => {
                let v = arg.parse::<i64>()
                           .map_err(|_| CoreError::invalid(flag, format!("integer argument expected, got {arg:?}")))?;
                Some(FlagValue::Integer(v))
            }
            (_, Some(arg)) => Some(FlagValue::Text(arg.to_string())),
        };
        self.with_flag(flag, value)
    }

    /// Quita un flag si estaba seleccionado.
    pub fn without(&mut self, flag: InchiFlag) -> &mut Self {
        self.selected.remove(&flag);
        self
    }

    pub fn contains(&self, flag: InchiFlag) -> bool {
        self.selected.contains_key(&flag)
    }

    /// Snapshot inmutable del estado actual.
    pub fn build(&self) -> Options {
        Options::from_selection(self.selected.clone())
    }
}

impl From<&Options> for OptionsBuilder {
    fn from(options: &Options) -> Self {
        let selected = options.entries().map(|(flag, value)| (flag, value.cloned())).collect();
        OptionsBuilder { selected }
    }
}

fn check_arity(flag: InchiFlag, arg: Option<FlagValue>) -> Result<Option<FlagValue>, CoreError> {
    match (flag.arity(), arg) {
        (ArgKind::Switch, None) => Ok(None),
        (ArgKind::Switch, Some(_)) => Err(CoreError::invalid(flag, "flag takes no argument")),
        (_, None) => Err(CoreError::invalid(flag, "argument required")),
        (ArgKind::Integer, Some(FlagValue::Integer(v))) if v < 0 => {
            Err(CoreError::invalid(flag, format!("negative value {v}")))
        }
        (ArgKind::Integer, Some(v @ FlagValue::Integer(_))) => Ok(Some(v)),
        (ArgKind::Integer, Some(FlagValue::Text(_))) => Err(CoreError::invalid(flag, "integer argument expected")),
        (ArgKind::String, Some(FlagValue::Text(s))) => {
            if s.is_empty() {
                Err(CoreError::invalid(flag, "empty argument"))
            } else if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
                Err(CoreError::invalid(flag, format!("whitespace or control character in argument {s:?}")))
            } else if s.starts_with(['-', '/']) {
                Err(CoreError::invalid(flag, format!("argument {s:?} carries its own prefix")))
            } else if let Some(known) = shadowed_flag(&s) {
                Err(CoreError::invalid(flag, format!("{s:?} is the registered flag {known}; select it directly")))
            } else {
                Ok(Some(FlagValue::Text(s)))
            }
        }
        (ArgKind::String, Some(FlagValue::Integer(_))) => Err(CoreError::invalid(flag, "string argument expected")),
    }
}

/// Flag registrado al que equivale un switch verbatim: por nombre o token
/// (`SRac`, `OutErrINCHI`) o por token con valor pegado (`W60`, `WM500`).
fn shadowed_flag(raw: &str) -> Option<InchiFlag> {
    if let Ok(flag) = lookup(raw) {
        return Some(flag);
    }
    InchiFlag::ALL.iter().copied().filter(|f| f.arity() == ArgKind::Integer).find(|f| {
        let token = f.token();
        raw.len() > token.len()
        && raw.is_char_boundary(token.len())
        && raw[..token.len()].eq_ignore_ascii_case(token)
        && raw[token.len()..].chars().all(|c| c.is_ascii_digit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::ExclusionGroup;

    #[test]
    fn switch_rejects_argument() {
        let err = OptionsBuilder::new().with_flag(InchiFlag::FixedH, Some(1.into())).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { flag: InchiFlag::FixedH, .. }));
    }

    #[test]
    fn valued_flag_requires_argument() {
        let err = OptionsBuilder::new().with_switch(InchiFlag::Timeout).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { flag: InchiFlag::Timeout, .. }));
    }

    #[test]
    fn string_argument_rules() {
        let mut b = OptionsBuilder::new();
        assert!(b.with_flag(InchiFlag::RawOption, Some("".into())).is_err());
        assert!(b.with_flag(InchiFlag::RawOption, Some("Key XHash1".into())).is_err());
        assert!(b.with_flag(InchiFlag::RawOption, Some("Key\0".into())).is_err());
        assert!(b.with_flag(InchiFlag::RawOption, Some(3.into())).is_err());
        assert!(b.with_flag(InchiFlag::RawOption, Some("Key".into())).is_ok());
    }

    #[test]
    fn raw_option_cannot_stand_in_for_a_registered_flag() {
        let mut b = OptionsBuilder::new();
        b.with_switch(InchiFlag::SRel).unwrap();
        for raw in ["SRac", "srac", "AuxNone", "OutErrINCHI", "15T", "W60", "wm500"] {
            let err = b.with_flag(InchiFlag::RawOption, Some(raw.into())).unwrap_err();
            assert!(matches!(err, CoreError::InvalidArgument { flag: InchiFlag::RawOption, .. }), "{raw}");
        }
        let options = b.build();
        assert_eq!(crate::serialize_with(&options, crate::OptionPrefix::Dash), "-SRel");
        assert!(!options.aux_suppressed());
    }

    #[test]
    fn raw_option_rejects_its_own_prefix() {
        let mut b = OptionsBuilder::new();
        assert!(b.with_flag(InchiFlag::RawOption, Some("-NEWPSOFF".into())).is_err());
        assert!(b.with_flag(InchiFlag::RawOption, Some("/NEWPSOFF".into())).is_err());
        assert!(b.with_flag(InchiFlag::RawOption, Some("Wide".into())).is_ok());
        assert!(b.with_spec("RawOption=AuxNone").is_err());
        assert!(!b.build().contains(InchiFlag::AuxNone));
    }

    #[test]
    fn integer_argument_rules() {
        let mut b = OptionsBuilder::new();
        assert!(b.with_flag(InchiFlag::Timeout, Some((-1).into())).is_err());
        assert!(b.with_flag(InchiFlag::Timeout, Some("ten".into())).is_err());
        assert!(b.with_flag(InchiFlag::Timeout, Some(0.into())).is_ok());
    }

    #[test]
    fn conflicting_group_is_rejected_and_state_kept() {
        let mut b = OptionsBuilder::new();
        b.with_switch(InchiFlag::SRel).unwrap();
        let err = b.with_switch(InchiFlag::SRac).unwrap_err();
        assert_eq!(err,
                   CoreError::ConflictingFlag { requested: InchiFlag::SRac,
                                                selected: InchiFlag::SRel,
                                                group: ExclusionGroup::StereoInterpretation });
        assert!(b.contains(InchiFlag::SRel));
        assert!(!b.contains(InchiFlag::SRac));
    }

    #[test]
    fn same_flag_twice_is_not_a_conflict() {
        let mut b = OptionsBuilder::new();
        b.with_switch(InchiFlag::SRel).unwrap();
        assert!(b.with_switch(InchiFlag::SRel).is_ok());
        b.with_flag(InchiFlag::Timeout, Some(5.into())).unwrap();
        b.with_flag(InchiFlag::Timeout, Some(7.into())).unwrap();
        assert_eq!(b.build().value(InchiFlag::Timeout), Some(&FlagValue::Integer(7)));
    }

    #[test]
    fn timeout_picks_unit() {
        let whole = OptionsBuilder::new().with_timeout(Duration::from_secs(30)).map(|b| b.build()).unwrap();
        assert_eq!(whole.value(InchiFlag::Timeout), Some(&FlagValue::Integer(30)));
        let fraction = OptionsBuilder::new().with_timeout(Duration::from_millis(1500)).map(|b| b.build()).unwrap();
        assert_eq!(fraction.value(InchiFlag::TimeoutMs), Some(&FlagValue::Integer(1500)));
    }

    #[test]
    fn timeout_units_are_exclusive() {
        let mut b = OptionsBuilder::new();
        b.with_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(b.with_timeout(Duration::from_millis(250)),
                         Err(CoreError::ConflictingFlag { group: ExclusionGroup::Timeout, .. })));
    }

    #[test]
    fn without_frees_the_group() {
        let mut b = OptionsBuilder::new();
        b.with_switch(InchiFlag::ChiralFlagON).unwrap();
        b.without(InchiFlag::ChiralFlagON);
        assert!(b.with_switch(InchiFlag::ChiralFlagOFF).is_ok());
    }

    #[test]
    fn build_is_idempotent() {
        let mut b = OptionsBuilder::new();
        b.with_flags([InchiFlag::FixedH, InchiFlag::RecMet]).unwrap();
        assert_eq!(b.build(), b.build());
    }

    #[test]
    fn specs_are_parsed_through_the_registry() {
        let mut b = OptionsBuilder::new();
        b.with_spec("-fixedh").unwrap().with_spec("W=10").unwrap().with_spec("RawOption=NEWPSOFF").unwrap();
        let options = b.build();
        assert!(options.contains(InchiFlag::FixedH));
        assert_eq!(options.value(InchiFlag::Timeout), Some(&FlagValue::Integer(10)));
        assert_eq!(options.value(InchiFlag::RawOption), Some(&FlagValue::Text("NEWPSOFF".into())));

        assert!(matches!(b.with_spec("W=ten"), Err(CoreError::InvalidArgument { flag: InchiFlag::Timeout, .. })));
        assert!(matches!(b.with_spec("FixedH=1"), Err(CoreError::InvalidArgument { flag: InchiFlag::FixedH, .. })));
        assert!(matches!(b.with_spec("Bogus"), Err(CoreError::UnknownFlag(_))));
    }

    #[test]
    fn builder_from_snapshot() {
        let mut b = OptionsBuilder::new();
        b.with_switch(InchiFlag::SUU).unwrap();
        let snapshot = b.build();
        let mut derived = OptionsBuilder::from(&snapshot);
        derived.with_switch(InchiFlag::KET).unwrap();
        assert!(derived.build().contains(InchiFlag::SUU));
        assert!(!snapshot.contains(InchiFlag::KET));
    }
}
