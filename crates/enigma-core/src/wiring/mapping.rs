// crates/enigma-core/src/wiring/mapping.rs

use crate::fixed::letter::Letter;

/// Fixed monoalphabetic substitution over A..Z.
///
/// Backed by a 26-entry table indexed by letter, so a lookup is one array read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mapping {
    table: [Letter; Letter::COUNT],
}

impl Mapping {
    pub fn identity() -> Mapping {
        let mut table = [Letter::A; Letter::COUNT];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = Letter::A.shift(i as i64);
        }
        Mapping { table }
    }

    /// Parse a wiring string such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    /// Returns `None` unless it is a permutation of the 26 letters (case-insensitive).
    pub fn from_wiring(wiring: &str) -> Option<Mapping> {
        let mut table = [Letter::A; Letter::COUNT];
        let mut seen = [false; Letter::COUNT];
        let mut n = 0usize;
        for c in wiring.chars() {
            if n == Letter::COUNT {
                return None;
            }
            let l = Letter::from_char(c)?;
            if seen[l.index()] {
                return None;
            }
            seen[l.index()] = true;
            table[n] = l;
            n += 1;
        }
        if n != Letter::COUNT {
            return None;
        }
        Some(Mapping { table })
    }

    /// Catalog tables are checked by tests, not at runtime.
    pub(crate) const fn from_table(bytes: &[u8; 26]) -> Mapping {
        let mut table = [Letter::A; Letter::COUNT];
        let mut i = 0;
        while i < Letter::COUNT {
            table[i] = Letter::from_ascii_unchecked(bytes[i]);
            i += 1;
        }
        Mapping { table }
    }

    #[inline]
    pub fn apply(&self, c: Letter) -> Letter {
        self.table[c.index()]
    }

    pub fn inverse(&self) -> Mapping {
        let mut table = [Letter::A; Letter::COUNT];
        for l in Letter::all() {
            table[self.apply(l).index()] = l;
        }
        Mapping { table }
    }

    pub fn is_involution(&self) -> bool {
        Letter::all().all(|l| self.apply(self.apply(l)) == l)
    }

    pub fn fixed_points(&self) -> usize {
        Letter::all().filter(|&l| self.apply(l) == l).count()
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; Letter::COUNT];
        for l in self.table {
            if seen[l.index()] {
                return false;
            }
            seen[l.index()] = true;
        }
        true
    }

    /// The 26-letter wiring string.
    pub fn wiring(&self) -> String {
        self.table.iter().map(|l| l.to_char()).collect()
    }
}
