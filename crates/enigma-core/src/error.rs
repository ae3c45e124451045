use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnigmaError>;

#[derive(Debug, Error)]
pub enum EnigmaError {
    #[error("invalid stecker: {0}")]
    InvalidStecker(String),

    #[error("invalid reflector: {0}")]
    InvalidReflector(String),

    #[error("ring must be exactly 3 letters, got {0}")]
    InvalidRingLength(usize),

    #[error("key must be exactly 3 letters, got {0}")]
    InvalidKeyLength(usize),

    #[error("ring character {ch:?} at position {pos} is not a letter A-Z")]
    InvalidRingChar { pos: usize, ch: char },

    #[error("key character {ch:?} at position {pos} is not a letter A-Z")]
    InvalidKeyChar { pos: usize, ch: char },

    #[error("rotor order needs exactly 3 rotors, got {0}")]
    InvalidRotorCount(usize),

    #[error("rotor id {0} is outside 1..=5")]
    InvalidRotorId(i32),

    #[error("rotor {0} appears more than once in the rotor order")]
    DuplicateRotor(i32),

    #[error("input character {ch:?} at position {pos} is not an uppercase letter A-Z")]
    InvalidPlaintext { pos: usize, ch: char },

    #[error("settings format error: {0}")]
    SettingsFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_setting() {
        assert_eq!(
            EnigmaError::InvalidRingLength(2).to_string(),
            "ring must be exactly 3 letters, got 2"
        );
        assert_eq!(
            EnigmaError::InvalidKeyChar { pos: 0, ch: '?' }.to_string(),
            "key character '?' at position 0 is not a letter A-Z"
        );
        assert_eq!(
            EnigmaError::DuplicateRotor(4).to_string(),
            "rotor 4 appears more than once in the rotor order"
        );
    }
}
