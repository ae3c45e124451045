// crates/enigma-core/src/machine/state.rs

use crate::fixed::letter::Letter;
use crate::settings::settings::MachineConfig;

pub const LEFT: usize = 0;
pub const MIDDLE: usize = 1;
pub const RIGHT: usize = 2;

/// Keystrokes between two turnovers of the same wheel.
pub const NOTCH_SPAN: u8 = 26;

/// Per-run rotor counters, indexed by slot (LEFT, MIDDLE, RIGHT).
///
/// `movements[i]` is the wheel's offset against its wiring (key minus ring,
/// plus every step taken); only its value mod 26 matters to the signal path.
/// `notches[i]` counts down the keystrokes until wheel `i` next carries into
/// its left neighbour and always lies in `1..=26`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MachineState {
    pub movements: [i64; 3],
    pub notches: [u8; 3],
}

impl MachineState {
    pub fn new(cfg: &MachineConfig) -> MachineState {
        let mut movements = [0i64; 3];
        let mut notches = [NOTCH_SPAN; 3];
        for slot in [LEFT, MIDDLE, RIGHT] {
            let key = cfg.key[slot].index() as i64;
            let ring = cfg.ring[slot].index() as i64;
            movements[slot] = key - ring;
            // counter hits zero on the keystroke that moves the wheel off its notch letter
            let notch = cfg.rotors[slot].notch as i64 - 1;
            notches[slot] = ((notch - key).rem_euclid(NOTCH_SPAN as i64) + 1) as u8;
        }
        MachineState { movements, notches }
    }

    /// Letters showing in the windows, given the ring settings the state was built with.
    pub fn window(&self, ring: &[Letter; 3]) -> [Letter; 3] {
        [
            ring[LEFT].shift(self.movements[LEFT]),
            ring[MIDDLE].shift(self.movements[MIDDLE]),
            ring[RIGHT].shift(self.movements[RIGHT]),
        ]
    }
}
