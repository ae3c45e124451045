// crates/enigma-core/src/settings/format.rs

use crate::error::{EnigmaError, Result};
use crate::settings::settings::{letters, MachineConfig, PlugboardSpec, ReflectorSelector, Settings};
use crate::validate::parse_settings;

pub const MAGIC: &[u8; 4] = b"ENK1";
const VERSION: u16 = 1;

const FLAG_SKIP_PLUGBOARD_CHECK: u8 = 0x01;

/// Binary settings blob (little-endian):
/// MAGIC[4]
/// version:u16
/// flags:u8            (bit0 = plugboard validation skipped)
/// rotors[3]           (catalog ids, left..right)
/// ring[3] key[3]      (ASCII A-Z)
/// reflector[26]       (ASCII wiring)
/// plug_count:u8
/// pairs[2*plug_count] (ASCII)
/// crc32:u32           (over everything before crc32)
/// blake3_16:[16]      (over everything before blake3)
pub fn encode(cfg: &MachineConfig) -> Result<Vec<u8>> {
    let pairs = cfg.plugboard.pairs();
    let n = u8::try_from(pairs.len()).map_err(|_| {
        EnigmaError::SettingsFormat(format!("too many plug pairs: {} (max 255)", pairs.len()))
    })?;
    let mut b = Vec::with_capacity(4 + 2 + 1 + 3 + 6 + 26 + 1 + 2 * pairs.len() + 4 + 16);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());

    let flags = if cfg.skip_plugboard_validation {
        FLAG_SKIP_PLUGBOARD_CHECK
    } else {
        0
    };
    b.push(flags);

    b.extend_from_slice(&cfg.rotor_ids());
    b.extend_from_slice(letters(&cfg.ring).as_bytes());
    b.extend_from_slice(letters(&cfg.key).as_bytes());
    b.extend_from_slice(cfg.reflector.wiring().as_bytes());

    b.push(n);
    for (a, c) in pairs {
        b.push(a.to_char() as u8);
        b.push(c.to_char() as u8);
    }

    seal(&mut b);
    Ok(b)
}

/// Decode and re-validate a blob. Any integrity or settings failure is an error.
pub fn decode(bytes: &[u8]) -> Result<MachineConfig> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(EnigmaError::SettingsFormat("bad magic".into()));
    }
    let body_len = verify(bytes)?;
    let body = &bytes[..body_len];
    let mut i = 4usize;

    let version = u16::from_le_bytes(read::<2>(body, &mut i)?);
    if version != VERSION {
        return Err(EnigmaError::SettingsFormat(format!("unsupported version {version}")));
    }
    let [flags] = read::<1>(body, &mut i)?;
    if flags & !FLAG_SKIP_PLUGBOARD_CHECK != 0 {
        return Err(EnigmaError::SettingsFormat(format!("unknown flags {flags:#04x}")));
    }

    let rotors = read::<3>(body, &mut i)?;
    let ring = read::<3>(body, &mut i)?;
    let key = read::<3>(body, &mut i)?;
    let reflector = read::<26>(body, &mut i)?;

    let [n] = read::<1>(body, &mut i)?;
    let mut pairs = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let [a, c] = read::<2>(body, &mut i)?;
        pairs.push((a as char, c as char));
    }
    if i != body.len() {
        return Err(EnigmaError::SettingsFormat("trailing bytes before checksum".into()));
    }

    let settings = Settings {
        rotor_order: rotors.iter().map(|&r| r as i32).collect(),
        key: ascii(&key),
        reflector: ReflectorSelector::Wiring(ascii(&reflector)),
        ring: ascii(&ring),
        plugboard: PlugboardSpec::Pairs(pairs),
        skip_plugboard_validation: flags & FLAG_SKIP_PLUGBOARD_CHECK != 0,
    };
    parse_settings(&settings)
}

/// Stable identifier of a configuration: the trailing blake3_16 of its blob.
pub fn settings_id_16(cfg: &MachineConfig) -> Result<[u8; 16]> {
    settings_id_from_encoded(&encode(cfg)?)
}

pub fn settings_id_hex(cfg: &MachineConfig) -> Result<String> {
    Ok(id_hex(&settings_id_16(cfg)?))
}

pub fn id_hex(id: &[u8; 16]) -> String {
    id.iter().map(|b| format!("{b:02x}")).collect()
}

/// Read the id embedded in an encoded blob without decoding it.
pub fn settings_id_from_encoded(encoded: &[u8]) -> Result<[u8; 16]> {
    if encoded.len() < 16 {
        return Err(EnigmaError::SettingsFormat("encoded settings too small for id".into()));
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&encoded[encoded.len() - 16..]);
    Ok(out)
}

fn seal(b: &mut Vec<u8>) {
    let mut h = crc32fast::Hasher::new();
    h.update(b);
    let crc = h.finalize();
    b.extend_from_slice(&crc.to_le_bytes());

    let hash = blake3::hash(b);
    b.extend_from_slice(&hash.as_bytes()[..16]);
}

/// Check crc32 and blake3_16; returns the length of the payload they cover.
fn verify(bytes: &[u8]) -> Result<usize> {
    if bytes.len() < 4 + 4 + 16 {
        return Err(EnigmaError::SettingsFormat("unexpected eof".into()));
    }
    let hash_at = bytes.len() - 16;
    let crc_at = hash_at - 4;

    let mut crc_le = [0u8; 4];
    crc_le.copy_from_slice(&bytes[crc_at..hash_at]);
    let mut h = crc32fast::Hasher::new();
    h.update(&bytes[..crc_at]);
    if u32::from_le_bytes(crc_le) != h.finalize() {
        return Err(EnigmaError::SettingsFormat("crc32 mismatch".into()));
    }

    if blake3::hash(&bytes[..hash_at]).as_bytes()[..16] != bytes[hash_at..] {
        return Err(EnigmaError::SettingsFormat("blake3 mismatch".into()));
    }
    Ok(crc_at)
}

fn read<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    if bytes.len() < *i + N {
        return Err(EnigmaError::SettingsFormat("unexpected eof".into()));
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*i..*i + N]);
    *i += N;
    Ok(out)
}

fn ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
