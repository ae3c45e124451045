// crates/enigma-core/src/machine/engine.rs

use crate::error::{EnigmaError, Result};
use crate::fixed::letter::Letter;
use crate::machine::{
    signal::SignalPath,
    state::MachineState,
    stepping::{self, StepEvents},
};
use crate::settings::settings::{MachineConfig, Settings};
use crate::stats::counters::Counters;
use crate::validate::parse_settings;

/// A configured machine and its per-run rotor state.
///
/// Each instance owns its state; characters of one message must go through
/// the same instance in order. Independent messages use independent machines.
#[derive(Clone, Debug)]
pub struct Machine {
    config: MachineConfig,
    path: SignalPath,
    pub state: MachineState,
    pub stats: Counters,
}

impl Machine {
    pub fn new(settings: &Settings) -> Result<Self> {
        let config = parse_settings(settings)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: MachineConfig) -> Self {
        let path = SignalPath::new(&config);
        let state = MachineState::new(&config);
        Self {
            config,
            path,
            state,
            stats: Counters::default(),
        }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Letters currently showing in the windows (left, middle, right).
    pub fn window(&self) -> [Letter; 3] {
        self.state.window(&self.config.ring)
    }

    /// Step the wheels, then encipher one letter.
    pub fn press(&mut self, c: Letter) -> Letter {
        let (next, ev) = stepping::tick(self.state);
        self.state = next;
        self.observe(ev);
        self.path.encipher(c, &self.state.movements)
    }

    /// Encipher a whole message of uppercase letters.
    ///
    /// The input is checked up front so a bad character fails the call
    /// before any wheel moves.
    pub fn run(&mut self, text: &str) -> Result<String> {
        let letters = text
            .chars()
            .enumerate()
            .map(|(pos, ch)| Letter::from_upper(ch).ok_or(EnigmaError::InvalidPlaintext { pos, ch }))
            .collect::<Result<Vec<_>>>()?;

        let mut out = String::with_capacity(letters.len());
        for l in letters {
            out.push(self.press(l).to_char());
        }
        Ok(out)
    }

    fn observe(&mut self, ev: StepEvents) {
        self.stats.keypresses += 1;
        self.stats.middle_steps += ev.middle as u64;
        self.stats.left_steps += ev.left as u64;
        if ev.double_step {
            self.stats.double_steps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_input_leaves_wheels_untouched() {
        let mut m = Machine::new(&Settings::new([1, 2, 3], "AAA")).unwrap();
        let before = m.state;
        let err = m.run("AB!C").unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidPlaintext { pos: 2, ch: '!' }));
        assert_eq!(m.state, before);
        assert_eq!(m.stats.keypresses, 0);
    }

    #[test]
    fn lowercase_is_not_accepted_by_the_core() {
        let mut m = Machine::new(&Settings::new([1, 2, 3], "AAA")).unwrap();
        assert!(m.run("abc").is_err());
    }

    #[test]
    fn window_tracks_key_not_ring() {
        let s = Settings::new([1, 2, 3], "ADU").with_ring("XYZ");
        let mut m = Machine::new(&s).unwrap();
        assert_eq!(m.window().map(|l| l.to_char()), ['A', 'D', 'U']);
        m.run("AAA").unwrap();
        assert_eq!(m.window().map(|l| l.to_char()), ['B', 'F', 'X']);
    }
}
