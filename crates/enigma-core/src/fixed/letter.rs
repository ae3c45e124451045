use std::fmt;

/// Index of a letter on the 26-contact wheel (A = 0 .. Z = 25).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub const COUNT: usize = 26;
    pub const A: Letter = Letter(0);
    pub const Z: Letter = Letter(25);

    #[inline]
    pub fn from_index(i: u8) -> Option<Letter> {
        if (i as usize) < Self::COUNT {
            Some(Letter(i))
        } else {
            None
        }
    }

    /// Accepts `A..=Z` and `a..=z`.
    #[inline]
    pub fn from_char(c: char) -> Option<Letter> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Accepts `A..=Z` only.
    #[inline]
    pub fn from_upper(c: char) -> Option<Letter> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    /// Table bytes are trusted to be `b'A'..=b'Z'`.
    #[inline]
    pub(crate) const fn from_ascii_unchecked(b: u8) -> Letter {
        Letter((b - b'A') % 26)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Rotate by `d` contacts, wrapping modulo 26. `d` may be negative.
    #[inline]
    pub fn shift(self, d: i64) -> Letter {
        let d = d.rem_euclid(Self::COUNT as i64) as u8;
        Letter((self.0 + d) % Self::COUNT as u8)
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_wraps_both_ways() {
        let z = Letter::Z;
        assert_eq!(z.shift(1), Letter::A);
        assert_eq!(Letter::A.shift(-1), Letter::Z);
        assert_eq!(Letter::A.shift(26 * 1_000_003 + 2).to_char(), 'C');
        assert_eq!(Letter::A.shift(i64::MIN).index(), (i64::MIN).rem_euclid(26) as usize);
    }

    #[test]
    fn char_conversions() {
        assert_eq!(Letter::from_char('q').map(Letter::to_char), Some('Q'));
        assert_eq!(Letter::from_upper('q'), None);
        assert_eq!(Letter::from_char('1'), None);
        assert_eq!(Letter::from_index(26), None);
        assert_eq!(Letter::all().count(), 26);
    }
}
