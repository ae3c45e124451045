// crates/enigma-core/src/settings/settings.rs

use crate::fixed::letter::Letter;
use crate::wiring::catalog::{self, RotorSpec};
use crate::wiring::mapping::Mapping;
use crate::wiring::plugboard::Plugboard;

/// Reflector choice: a catalog identifier or a full 26-letter wiring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReflectorSelector {
    Named(char),
    Wiring(String),
}

impl Default for ReflectorSelector {
    fn default() -> Self {
        ReflectorSelector::Named('B')
    }
}

impl From<char> for ReflectorSelector {
    fn from(c: char) -> Self {
        ReflectorSelector::Named(c)
    }
}

impl From<&str> for ReflectorSelector {
    /// One character selects by identifier; anything else is taken as a wiring.
    fn from(s: &str) -> Self {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => ReflectorSelector::Named(c),
            _ => ReflectorSelector::Wiring(s.to_string()),
        }
    }
}

/// Stecker pairs, either as a flat sequence (`"ABCD"` = A-B, C-D) or explicit pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlugboardSpec {
    Sequence(String),
    Pairs(Vec<(char, char)>),
}

impl Default for PlugboardSpec {
    fn default() -> Self {
        PlugboardSpec::Pairs(Vec::new())
    }
}

impl From<&str> for PlugboardSpec {
    fn from(s: &str) -> Self {
        PlugboardSpec::Sequence(s.to_string())
    }
}

impl From<Vec<(char, char)>> for PlugboardSpec {
    fn from(pairs: Vec<(char, char)>) -> Self {
        PlugboardSpec::Pairs(pairs)
    }
}

/// Raw, caller-supplied machine settings. Nothing here is validated yet;
/// see [`crate::validate::parse_settings`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Catalog ids for the (left, middle, right) slots.
    pub rotor_order: Vec<i32>,
    pub key: String,
    pub reflector: ReflectorSelector,
    pub ring: String,
    pub plugboard: PlugboardSpec,
    pub skip_plugboard_validation: bool,
}

impl Settings {
    /// Reflector B, ring `AAA`, empty plugboard.
    pub fn new(rotor_order: impl Into<Vec<i32>>, key: impl Into<String>) -> Self {
        Settings {
            rotor_order: rotor_order.into(),
            key: key.into(),
            reflector: ReflectorSelector::default(),
            ring: "AAA".to_string(),
            plugboard: PlugboardSpec::default(),
            skip_plugboard_validation: false,
        }
    }

    pub fn with_reflector(mut self, reflector: impl Into<ReflectorSelector>) -> Self {
        self.reflector = reflector.into();
        self
    }

    pub fn with_ring(mut self, ring: impl Into<String>) -> Self {
        self.ring = ring.into();
        self
    }

    pub fn with_plugboard(mut self, plugboard: impl Into<PlugboardSpec>) -> Self {
        self.plugboard = plugboard.into();
        self
    }

    pub fn skip_plugboard_validation(mut self, skip: bool) -> Self {
        self.skip_plugboard_validation = skip;
        self
    }
}

/// Canonical, validated machine parameters. Slots are ordered (left, middle, right).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineConfig {
    pub rotors: [RotorSpec; 3],
    pub ring: [Letter; 3],
    pub key: [Letter; 3],
    pub reflector: Mapping,
    pub plugboard: Plugboard,
    pub skip_plugboard_validation: bool,
}

impl MachineConfig {
    pub fn rotor_ids(&self) -> [u8; 3] {
        self.rotors.map(|r| r.id)
    }

    /// Map back to raw settings. Catalog reflectors come back as identifiers.
    pub fn to_settings(&self) -> Settings {
        let reflector = match catalog::reflector_id(&self.reflector) {
            Some(id) => ReflectorSelector::Named(id),
            None => ReflectorSelector::Wiring(self.reflector.wiring()),
        };
        Settings {
            rotor_order: self.rotors.iter().map(|r| r.id as i32).collect(),
            key: letters(&self.key),
            reflector,
            ring: letters(&self.ring),
            plugboard: PlugboardSpec::Pairs(
                self.plugboard
                    .pairs()
                    .iter()
                    .map(|(a, b)| (a.to_char(), b.to_char()))
                    .collect(),
            ),
            skip_plugboard_validation: self.skip_plugboard_validation,
        }
    }
}

pub(crate) fn letters(ls: &[Letter]) -> String {
    ls.iter().map(|l| l.to_char()).collect()
}
