// crates/enigma-cli/src/cmd/mod.rs

pub mod args;
pub mod cipher;
pub mod settings;
