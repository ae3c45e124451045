// crates/enigma-core/src/wiring/plugboard.rs

use crate::fixed::letter::Letter;

/// Stecker board. Only paired letters are stored; everything else passes through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(Letter, Letter)>,
    table: [Option<Letter>; Letter::COUNT],
}

impl Plugboard {
    pub fn empty() -> Plugboard {
        Plugboard::default()
    }

    /// Pairs are applied in order; a later pair overwrites earlier entries for
    /// the same letter. Disjointness is the parser's job.
    pub fn from_pairs(pairs: &[(Letter, Letter)]) -> Plugboard {
        let mut table = [None; Letter::COUNT];
        for &(a, b) in pairs {
            table[a.index()] = Some(b);
            table[b.index()] = Some(a);
        }
        Plugboard {
            pairs: pairs.to_vec(),
            table,
        }
    }

    #[inline]
    pub fn apply(&self, c: Letter) -> Letter {
        self.table[c.index()].unwrap_or(c)
    }

    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
