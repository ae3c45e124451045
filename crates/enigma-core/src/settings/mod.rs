pub mod format;
pub mod settings;
pub mod sheet;

use std::path::Path;

use crate::error::{EnigmaError, Result};
use crate::settings::settings::Settings;

/// Settings from either an `ENK1` blob or a text key sheet, told apart by magic.
pub fn from_bytes(bytes: &[u8]) -> Result<Settings> {
    if bytes.starts_with(format::MAGIC) {
        return format::decode(bytes).map(|cfg| cfg.to_settings());
    }
    let text = std::str::from_utf8(bytes)
        .map_err(|e| EnigmaError::SettingsFormat(format!("key sheet is not utf-8: {e}")))?;
    sheet::parse_sheet(text)
}

pub fn load(path: impl AsRef<Path>) -> Result<Settings> {
    let bytes = std::fs::read(path)?;
    from_bytes(&bytes)
}
