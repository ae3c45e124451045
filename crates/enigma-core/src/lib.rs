pub mod error;
pub mod validate;

pub mod fixed;
pub mod wiring;
pub mod machine;
pub mod settings;
pub mod stats;
pub mod repr;

pub use crate::error::{EnigmaError, Result};
pub use crate::machine::engine::Machine;
pub use crate::settings::settings::{MachineConfig, PlugboardSpec, ReflectorSelector, Settings};

/// Encipher uppercase letters with a freshly initialised machine.
///
/// The input must already be sanitised (A–Z only); see
/// [`repr::text_norm::sanitize`].
pub fn encrypt(plaintext: &str, settings: &Settings) -> Result<String> {
    let mut machine = Machine::new(settings)?;
    machine.run(plaintext)
}

/// Same transformation as [`encrypt`]; the result is lowercase to mark the
/// decrypt direction.
pub fn decrypt(ciphertext: &str, settings: &Settings) -> Result<String> {
    encrypt(ciphertext, settings).map(|s| s.to_ascii_lowercase())
}
