// crates/enigma-cli/src/io/settings_file.rs

use anyhow::{Context, Result};
use enigma_core::settings::{self, format as settings_format};
use enigma_core::{MachineConfig, Settings};

/// Load a key sheet or .enk blob.
pub fn load(path: &str) -> Result<Settings> {
    settings::load(path).with_context(|| format!("load settings {path}"))
}

/// Raw bytes of a settings file, for callers that look past the parsed settings.
pub fn read_raw(path: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read settings {path}"))
}

/// Save a validated configuration as an .enk blob.
pub fn save_enk(path: &str, cfg: &MachineConfig) -> Result<()> {
    let bytes = settings_format::encode(cfg).with_context(|| format!("encode settings {path}"))?;
    std::fs::write(path, bytes).with_context(|| format!("write settings {path}"))?;
    Ok(())
}
