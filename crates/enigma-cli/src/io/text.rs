// crates/enigma-cli/src/io/text.rs

use anyhow::{Context, Result};

pub fn read_message(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read message {path}"))
}

pub fn write_message(path: &str, text: &str) -> Result<()> {
    let mut body = text.to_string();
    body.push('\n');
    std::fs::write(path, body).with_context(|| format!("write message {path}"))
}
