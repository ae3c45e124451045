// crates/enigma-core/src/wiring/catalog.rs
//
// Army Enigma I wheel set and reflectors. Tables are fixed by the historical
// machine; everything downstream relies on them being exact.

use crate::wiring::mapping::Mapping;

pub const ROTOR_COUNT: usize = 5;

pub const ROTOR_WIRINGS: [&[u8; 26]; ROTOR_COUNT] = [
    b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
    b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
    b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
    b"VZBRGITYUPSDNHLXAWMJQOFECK",
];

/// Turnover letters Q, E, V, J, Z as 1-based positions.
pub const ROTOR_NOTCHES: [u8; ROTOR_COUNT] = [17, 5, 22, 10, 26];

pub const REFLECTOR_IDS: [char; 3] = ['A', 'B', 'C'];

pub const REFLECTOR_WIRINGS: [&[u8; 26]; 3] = [
    b"EJMZALYXVBWFCRQUONTSPIKHGD",
    b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
    b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorSpec {
    /// 1-based catalog index.
    pub id: u8,
    pub wiring: Mapping,
    /// 1-based turnover position.
    pub notch: u8,
}

impl RotorSpec {
    pub fn inverse(&self) -> Mapping {
        self.wiring.inverse()
    }
}

/// Look up a wheel by its 1-based catalog index.
pub fn rotor(id: u8) -> Option<RotorSpec> {
    let i = (id as usize).checked_sub(1)?;
    let wiring = ROTOR_WIRINGS.get(i)?;
    Some(RotorSpec {
        id,
        wiring: Mapping::from_table(wiring),
        notch: ROTOR_NOTCHES[i],
    })
}

/// Look up a reflector by identifier (case-insensitive).
pub fn reflector(id: char) -> Option<Mapping> {
    let id = id.to_ascii_uppercase();
    REFLECTOR_IDS
        .iter()
        .position(|&r| r == id)
        .map(|i| Mapping::from_table(REFLECTOR_WIRINGS[i]))
}

/// Reverse lookup: the identifier of a named reflector, if `m` is one.
pub fn reflector_id(m: &Mapping) -> Option<char> {
    REFLECTOR_IDS
        .iter()
        .zip(REFLECTOR_WIRINGS.iter())
        .find(|(_, w)| Mapping::from_table(w) == *m)
        .map(|(&id, _)| id)
}
