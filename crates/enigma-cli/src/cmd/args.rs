// crates/enigma-cli/src/cmd/args.rs

use clap::Args;
use enigma_core::settings::sheet::parse_rotor_list;
use enigma_core::{ReflectorSelector, Settings};

use crate::io::settings_file;

/// Machine settings shared by every command that builds a machine.
#[derive(Args, Debug, Clone)]
pub struct MachineArgs {
    /// Key sheet or .enk blob to start from
    #[arg(long)]
    pub settings: Option<String>,

    /// Wheel order, left to right (e.g. 1,2,3)
    #[arg(long)]
    pub rotors: Option<String>,

    /// Starting window letters (e.g. ABC)
    #[arg(long)]
    pub key: Option<String>,

    /// Reflector id (A, B, C) or a 26-letter wiring
    #[arg(long)]
    pub reflector: Option<String>,

    /// Ring settings (e.g. AAA)
    #[arg(long)]
    pub ring: Option<String>,

    /// Stecker pairs (e.g. "AV BS CG")
    #[arg(long)]
    pub plugboard: Option<String>,

    /// Accept letters plugged more than once
    #[arg(long, default_value_t = false)]
    pub skip_plugboard_check: bool,
}

impl MachineArgs {
    /// Precedence:
    /// 1) explicit flags
    /// 2) values from --settings
    /// 3) built-in defaults (reflector B, ring AAA, no plugs)
    ///
    /// --rotors and --key are required when --settings is absent.
    pub fn resolve(&self) -> anyhow::Result<Settings> {
        let mut s = match self.settings.as_deref() {
            Some(path) => settings_file::load(path)?,
            None => {
                let (Some(rotors), Some(key)) = (self.rotors.as_deref(), self.key.as_deref())
                else {
                    anyhow::bail!("either --settings or both --rotors and --key are required");
                };
                Settings::new(parse_rotor_list(rotors)?, key)
            }
        };

        if let Some(r) = self.rotors.as_deref() {
            s.rotor_order = parse_rotor_list(r)?;
        }
        if let Some(k) = self.key.as_deref() {
            s.key = k.to_string();
        }
        if let Some(r) = self.reflector.as_deref() {
            s.reflector = ReflectorSelector::from(r);
        }
        if let Some(r) = self.ring.as_deref() {
            s.ring = r.to_string();
        }
        if let Some(p) = self.plugboard.as_deref() {
            s.plugboard = p.into();
        }
        if self.skip_plugboard_check {
            s.skip_plugboard_validation = true;
        }
        Ok(s)
    }
}
