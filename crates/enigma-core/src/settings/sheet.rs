// crates/enigma-core/src/settings/sheet.rs
//
// Plain-text key sheet, one setting per line:
//
//   # daily key, wheels II IV V
//   rotors    = 2 4 5
//   ring      = BUL
//   key       = BLA
//   reflector = B
//   plugboard = AV BS CG DL FU HZ IN KM OW RX
//
// `rotors` and `key` are required; the rest fall back to the Settings defaults.

use crate::error::{EnigmaError, Result};
use crate::settings::settings::{PlugboardSpec, ReflectorSelector, Settings};

pub fn parse_sheet(text: &str) -> Result<Settings> {
    let mut rotors: Option<Vec<i32>> = None;
    let mut key: Option<String> = None;
    let mut ring: Option<String> = None;
    let mut reflector: Option<ReflectorSelector> = None;
    let mut plugboard: Option<PlugboardSpec> = None;
    let mut skip: Option<bool> = None;

    for (n, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let lineno = n + 1;
        let (name, value) = line.split_once('=').ok_or_else(|| {
            EnigmaError::SettingsFormat(format!("line {lineno}: expected `name = value`"))
        })?;
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim();

        let dup = match name.as_str() {
            "rotors" => rotors.replace(parse_rotor_list(value)?).is_some(),
            "key" => key.replace(value.to_string()).is_some(),
            "ring" => ring.replace(value.to_string()).is_some(),
            "reflector" => reflector.replace(ReflectorSelector::from(value)).is_some(),
            "plugboard" => plugboard
                .replace(PlugboardSpec::Sequence(value.to_string()))
                .is_some(),
            "skip_plugboard_check" => skip.replace(parse_bool(value, lineno)?).is_some(),
            other => {
                return Err(EnigmaError::SettingsFormat(format!(
                    "line {lineno}: unknown setting `{other}`"
                )))
            }
        };
        if dup {
            return Err(EnigmaError::SettingsFormat(format!(
                "line {lineno}: `{name}` given more than once"
            )));
        }
    }

    let rotors = rotors.ok_or_else(|| EnigmaError::SettingsFormat("missing `rotors`".into()))?;
    let key = key.ok_or_else(|| EnigmaError::SettingsFormat("missing `key`".into()))?;

    let mut s = Settings::new(rotors, key);
    if let Some(ring) = ring {
        s.ring = ring;
    }
    if let Some(r) = reflector {
        s.reflector = r;
    }
    if let Some(p) = plugboard {
        s.plugboard = p;
    }
    s.skip_plugboard_validation = skip.unwrap_or(false);
    Ok(s)
}

pub fn render_sheet(s: &Settings) -> String {
    let rotors: Vec<String> = s.rotor_order.iter().map(|r| r.to_string()).collect();
    let reflector = match &s.reflector {
        ReflectorSelector::Named(c) => c.to_string(),
        ReflectorSelector::Wiring(w) => w.clone(),
    };
    let pairs: Vec<String> = match &s.plugboard {
        PlugboardSpec::Sequence(seq) => {
            let chars: Vec<char> = seq.chars().filter(|c| !c.is_whitespace()).collect();
            chars.chunks(2).map(|p| p.iter().collect()).collect()
        }
        PlugboardSpec::Pairs(p) => p.iter().map(|(a, b)| format!("{a}{b}")).collect(),
    };

    let mut out = String::new();
    out.push_str(&format!("rotors    = {}\n", rotors.join(" ")));
    out.push_str(&format!("ring      = {}\n", s.ring));
    out.push_str(&format!("key       = {}\n", s.key));
    out.push_str(&format!("reflector = {reflector}\n"));
    out.push_str(&format!("plugboard = {}\n", pairs.join(" ")));
    if s.skip_plugboard_validation {
        out.push_str("skip_plugboard_check = true\n");
    }
    out
}

/// Wheel ids separated by spaces and/or commas: `"1 2 3"`, `"1,2,3"`.
pub fn parse_rotor_list(value: &str) -> Result<Vec<i32>> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<i32>()
                .map_err(|_| EnigmaError::SettingsFormat(format!("bad rotor id `{t}`")))
        })
        .collect()
}

fn parse_bool(value: &str, lineno: usize) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(EnigmaError::SettingsFormat(format!(
            "line {lineno}: expected true or false, got `{value}`"
        ))),
    }
}
