// crates/enigma-cli/src/cmd/settings.rs

use clap::{Args, Subcommand};
use enigma_core::settings::{self, format as settings_format};
use enigma_core::settings::sheet::render_sheet;
use enigma_core::validate::parse_settings;
use enigma_core::MachineConfig;

use crate::cmd::args::MachineArgs;
use crate::io::settings_file;

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub cmd: SettingsCmd,
}

#[derive(Subcommand)]
pub enum SettingsCmd {
    /// Validate settings and write them as an .enk blob
    Pack(PackArgs),

    /// Print canonical settings and settings id of a sheet or blob
    Inspect(InspectArgs),

    /// Print a key sheet for the given settings
    Sheet(SheetArgs),
}

#[derive(Args)]
pub struct PackArgs {
    #[command(flatten)]
    pub machine: MachineArgs,

    /// Output .enk path
    #[arg(long)]
    pub out: String,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Key sheet or .enk path
    #[arg(long)]
    pub r#in: String,
}

#[derive(Args)]
pub struct SheetArgs {
    #[command(flatten)]
    pub machine: MachineArgs,
}

pub fn run(args: SettingsArgs) -> anyhow::Result<()> {
    match args.cmd {
        SettingsCmd::Pack(a) => cmd_pack(a),
        SettingsCmd::Inspect(a) => cmd_inspect(a),
        SettingsCmd::Sheet(a) => cmd_sheet(a),
    }
}

fn cmd_pack(a: PackArgs) -> anyhow::Result<()> {
    let cfg = parse_settings(&a.machine.resolve()?)?;
    settings_file::save_enk(&a.out, &cfg)?;
    eprintln!(
        "pack ok: out={} settings_id={}",
        a.out,
        settings_format::settings_id_hex(&cfg)?
    );
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let bytes = settings_file::read_raw(&a.r#in)?;
    let cfg = parse_settings(&settings::from_bytes(&bytes)?)?;
    let id = settings_format::settings_id_hex(&cfg)?;

    println!("settings_path = {}", a.r#in);
    println!("settings_id   = {}", id);
    if bytes.starts_with(settings_format::MAGIC) {
        let embedded = settings_format::id_hex(&settings_format::settings_id_from_encoded(&bytes)?);
        println!("embedded_id   = {}", embedded);
        println!("id_match      = {}", embedded == id);
    }
    print_config(&cfg);
    Ok(())
}

fn cmd_sheet(a: SheetArgs) -> anyhow::Result<()> {
    let s = a.machine.resolve()?;
    // refuse to print a sheet the machine would reject
    parse_settings(&s)?;
    print!("{}", render_sheet(&s));
    Ok(())
}

fn print_config(cfg: &MachineConfig) {
    let ids = cfg.rotor_ids();
    let word = |ls: &[enigma_core::fixed::letter::Letter; 3]| -> String {
        ls.iter().map(|l| l.to_char()).collect()
    };

    println!("rotors        = {} {} {}", ids[0], ids[1], ids[2]);
    for (slot, r) in ["left", "middle", "right"].iter().zip(cfg.rotors.iter()) {
        println!(
            "rotor.{:<7}= {} notch={}",
            slot,
            r.wiring.wiring(),
            (b'A' + r.notch - 1) as char
        );
    }
    println!("ring          = {}", word(&cfg.ring));
    println!("key           = {}", word(&cfg.key));
    match enigma_core::wiring::catalog::reflector_id(&cfg.reflector) {
        Some(id) => println!("reflector     = {id}"),
        None => println!("reflector     = custom {}", cfg.reflector.wiring()),
    }
    let pairs: Vec<String> = cfg
        .plugboard
        .pairs()
        .iter()
        .map(|(a, b)| format!("{a}{b}"))
        .collect();
    println!("plugboard     = {}", pairs.join(" "));
    println!("plug_pairs    = {}", pairs.len());

    println!();
    println!("--- diagnostics ---");
    if cfg.skip_plugboard_validation {
        println!("WARN: plugboard validation was skipped; pairs may overlap");
    }
    if !cfg.reflector.is_involution() {
        println!("WARN: reflector is not an involution; decrypting will not invert encrypting");
    }
    if cfg.reflector.fixed_points() > 0 {
        println!(
            "WARN: reflector has {} fixed point(s)",
            cfg.reflector.fixed_points()
        );
    }
}
