// crates/enigma-core/src/machine/signal.rs
//
// Contact path for one key press:
//   plugboard -> R -> M -> L -> reflector -> L' -> M' -> R' -> plugboard
//
// A wheel's rotation is a relative index shift applied before consulting its
// fixed wiring table. Between wheels only the difference of their offsets is
// applied, so the tables are built once and never regenerated.

use crate::fixed::letter::Letter;
use crate::machine::state::{LEFT, MIDDLE, RIGHT};
use crate::settings::settings::MachineConfig;
use crate::wiring::mapping::Mapping;
use crate::wiring::plugboard::Plugboard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorWiring {
    pub forward: Mapping,
    pub inverse: Mapping,
}

impl RotorWiring {
    pub fn new(forward: Mapping) -> RotorWiring {
        RotorWiring {
            forward,
            inverse: forward.inverse(),
        }
    }
}

/// Immutable wiring of a configured machine, slots ordered (left, middle, right).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalPath {
    pub plugboard: Plugboard,
    pub rotors: [RotorWiring; 3],
    pub reflector: Mapping,
}

impl SignalPath {
    pub fn new(cfg: &MachineConfig) -> SignalPath {
        SignalPath {
            plugboard: cfg.plugboard.clone(),
            rotors: cfg.rotors.map(|r| RotorWiring::new(r.wiring)),
            reflector: cfg.reflector,
        }
    }

    /// Encipher one letter at the given wheel offsets. Pure.
    pub fn encipher(&self, c: Letter, m: &[i64; 3]) -> Letter {
        let [l, mid, r] = &self.rotors;

        let mut c = self.plugboard.apply(c);

        c = r.forward.apply(c.shift(m[RIGHT]));
        c = mid.forward.apply(c.shift(m[MIDDLE] - m[RIGHT]));
        c = l.forward.apply(c.shift(m[LEFT] - m[MIDDLE]));

        c = self.reflector.apply(c.shift(-m[LEFT]));

        c = l.inverse.apply(c.shift(m[LEFT]));
        c = mid.inverse.apply(c.shift(m[MIDDLE] - m[LEFT]));
        c = r.inverse.apply(c.shift(m[RIGHT] - m[MIDDLE]));

        self.plugboard.apply(c.shift(-m[RIGHT]))
    }
}
