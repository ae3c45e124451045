// crates/enigma-core/src/validate.rs
//
// Settings parser: raw Settings in, canonical MachineConfig out, or the first
// violation found. Checks run rotor order, ring, key, reflector, plugboard.

use crate::error::{EnigmaError, Result};
use crate::fixed::letter::Letter;
use crate::settings::settings::{MachineConfig, PlugboardSpec, ReflectorSelector, Settings};
use crate::wiring::catalog::{self, RotorSpec, ROTOR_COUNT};
use crate::wiring::mapping::Mapping;
use crate::wiring::plugboard::Plugboard;

pub fn parse_settings(s: &Settings) -> Result<MachineConfig> {
    let rotors = parse_rotor_order(&s.rotor_order)?;
    let ring = parse_ring(&s.ring)?;
    let key = parse_key(&s.key)?;
    let reflector = parse_reflector(&s.reflector)?;
    let plugboard = parse_plugboard(&s.plugboard, s.skip_plugboard_validation)?;

    Ok(MachineConfig {
        rotors,
        ring,
        key,
        reflector,
        plugboard,
        skip_plugboard_validation: s.skip_plugboard_validation,
    })
}

pub fn parse_rotor_order(order: &[i32]) -> Result<[RotorSpec; 3]> {
    if order.len() != 3 {
        return Err(EnigmaError::InvalidRotorCount(order.len()));
    }

    let mut specs = [RotorSpec {
        id: 0,
        wiring: Mapping::identity(),
        notch: 1,
    }; 3];
    for (slot, &id) in order.iter().enumerate() {
        if !(1..=ROTOR_COUNT as i32).contains(&id) {
            return Err(EnigmaError::InvalidRotorId(id));
        }
        if order[..slot].contains(&id) {
            return Err(EnigmaError::DuplicateRotor(id));
        }
        specs[slot] = catalog::rotor(id as u8).ok_or(EnigmaError::InvalidRotorId(id))?;
    }
    Ok(specs)
}

pub fn parse_ring(ring: &str) -> Result<[Letter; 3]> {
    parse_triple(ring, EnigmaError::InvalidRingLength, |pos, ch| {
        EnigmaError::InvalidRingChar { pos, ch }
    })
}

pub fn parse_key(key: &str) -> Result<[Letter; 3]> {
    parse_triple(key, EnigmaError::InvalidKeyLength, |pos, ch| {
        EnigmaError::InvalidKeyChar { pos, ch }
    })
}

fn parse_triple(
    s: &str,
    bad_len: fn(usize) -> EnigmaError,
    bad_char: fn(usize, char) -> EnigmaError,
) -> Result<[Letter; 3]> {
    let n = s.chars().count();
    if n != 3 {
        return Err(bad_len(n));
    }
    let mut out = [Letter::A; 3];
    for (pos, ch) in s.chars().enumerate() {
        out[pos] = Letter::from_char(ch).ok_or_else(|| bad_char(pos, ch))?;
    }
    Ok(out)
}

pub fn parse_reflector(sel: &ReflectorSelector) -> Result<Mapping> {
    match sel {
        ReflectorSelector::Named(id) => catalog::reflector(*id).ok_or_else(|| {
            EnigmaError::InvalidReflector(format!("unknown reflector {id:?} (expected A, B or C)"))
        }),
        ReflectorSelector::Wiring(w) => {
            let n = w.chars().count();
            if n == 1 {
                // a one-letter string is an identifier, not a wiring
                let id = w.chars().next().unwrap_or(' ');
                return parse_reflector(&ReflectorSelector::Named(id));
            }
            if n != Letter::COUNT {
                return Err(EnigmaError::InvalidReflector(format!(
                    "wiring must be 26 letters, got {n}"
                )));
            }
            let mut seen = [false; Letter::COUNT];
            for (pos, ch) in w.chars().enumerate() {
                let l = Letter::from_char(ch).ok_or_else(|| {
                    EnigmaError::InvalidReflector(format!(
                        "wiring character {ch:?} at position {pos} is not a letter"
                    ))
                })?;
                if seen[l.index()] {
                    return Err(EnigmaError::InvalidReflector(format!(
                        "wiring repeats {}",
                        l.to_char()
                    )));
                }
                seen[l.index()] = true;
            }
            Mapping::from_wiring(w)
                .ok_or_else(|| EnigmaError::InvalidReflector("wiring is not a permutation".into()))
        }
    }
}

pub fn parse_plugboard(spec: &PlugboardSpec, skip_validation: bool) -> Result<Plugboard> {
    let raw: Vec<(char, char)> = match spec {
        PlugboardSpec::Sequence(s) => {
            let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() % 2 != 0 {
                return Err(EnigmaError::InvalidStecker(format!(
                    "sequence has odd length {}",
                    chars.len()
                )));
            }
            chars.chunks_exact(2).map(|p| (p[0], p[1])).collect()
        }
        PlugboardSpec::Pairs(p) => p.clone(),
    };

    let mut pairs = Vec::with_capacity(raw.len());
    let mut used = [false; Letter::COUNT];
    for (a, b) in raw {
        let la = stecker_letter(a)?;
        let lb = stecker_letter(b)?;
        if !skip_validation {
            for l in [la, lb] {
                if used[l.index()] {
                    return Err(EnigmaError::InvalidStecker(format!(
                        "letter {} is plugged more than once",
                        l.to_char()
                    )));
                }
                used[l.index()] = true;
            }
        }
        pairs.push((la, lb));
    }
    Ok(Plugboard::from_pairs(&pairs))
}

fn stecker_letter(c: char) -> Result<Letter> {
    Letter::from_char(c)
        .ok_or_else(|| EnigmaError::InvalidStecker(format!("{c:?} is not a letter")))
}
