// crates/enigma-core/src/machine/stepping.rs

use crate::machine::state::{MachineState, LEFT, MIDDLE, NOTCH_SPAN, RIGHT};

/// Which wheels moved during one keystroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// 0, 1 or 2.
    pub middle: u8,
    pub left: u8,
    pub double_step: bool,
}

/// Advance one wheel by a single position; wraps its notch counter 0 -> 26.
/// Returns true when the counter wrapped, i.e. the wheel carried.
#[inline]
fn advance(s: &mut MachineState, slot: usize) -> bool {
    s.movements[slot] += 1;
    s.notches[slot] -= 1;
    if s.notches[slot] == 0 {
        s.notches[slot] = NOTCH_SPAN;
        true
    } else {
        false
    }
}

/// One keystroke worth of wheel motion. Runs before the contacts close.
pub fn tick(mut s: MachineState) -> (MachineState, StepEvents) {
    let mut ev = StepEvents::default();

    // right wheel always moves; ordinary carries ripple left
    if advance(&mut s, RIGHT) {
        ev.middle += 1;
        if advance(&mut s, MIDDLE) {
            ev.left += 1;
            advance(&mut s, LEFT);
        }
    }

    // Double step: checked against the post-carry counters, regardless of
    // whether a carry fired above. The middle wheel sits on its notch one
    // keystroke after the right wheel carried, and both it and the left wheel move.
    if s.notches[RIGHT] == NOTCH_SPAN - 1 && s.notches[MIDDLE] == 1 {
        ev.double_step = true;
        ev.middle += 1;
        ev.left += 1;
        advance(&mut s, MIDDLE);
        advance(&mut s, LEFT);
    }

    (s, ev)
}
