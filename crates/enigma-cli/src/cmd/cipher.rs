// crates/enigma-cli/src/cmd/cipher.rs

use clap::Args;
use enigma_core::repr::text_norm::{group, sanitize};
use enigma_core::settings::format::settings_id_hex;
use enigma_core::Machine;

use crate::cmd::args::MachineArgs;
use crate::io::text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

#[derive(Args)]
pub struct CipherArgs {
    #[command(flatten)]
    pub machine: MachineArgs,

    /// Message text (anything but letters is dropped)
    #[arg(long, conflicts_with = "in")]
    pub text: Option<String>,

    /// Read the message from this file instead of --text
    #[arg(long)]
    pub r#in: Option<String>,

    /// Write the result here instead of stdout
    #[arg(long)]
    pub out: Option<String>,

    /// Print output in groups of N letters (0 = no grouping)
    #[arg(long, default_value_t = 0)]
    pub groups: usize,
}

pub fn run(args: CipherArgs, dir: Direction) -> anyhow::Result<()> {
    let settings = args.machine.resolve()?;
    let mut machine = Machine::new(&settings)?;

    let raw = match (args.text.as_deref(), args.r#in.as_deref()) {
        (Some(t), _) => t.to_string(),
        (None, Some(path)) => text::read_message(path)?,
        (None, None) => anyhow::bail!("one of --text or --in is required"),
    };
    let clean = sanitize(&raw);

    let start = machine.window();
    let mut out = machine.run(&clean)?;
    if dir == Direction::Decrypt {
        out.make_ascii_lowercase();
    }
    let out = group(&out, args.groups);

    match args.out.as_deref() {
        Some(path) => text::write_message(path, &out)?,
        None => println!("{out}"),
    }

    let letters = |w: [enigma_core::fixed::letter::Letter; 3]| -> String {
        w.iter().map(|l| l.to_char()).collect()
    };
    // boards past the blob's pair limit still encipher; they just have no id
    let id = settings_id_hex(machine.config()).unwrap_or_else(|_| "none".to_string());
    eprintln!(
        "{} ok: in_chars={} dropped={} chars={} start={} end={} middle_steps={} double_steps={} settings_id={}",
        dir.label(),
        raw.chars().count(),
        raw.chars().count() - clean.len(),
        machine.stats.keypresses,
        letters(start),
        letters(machine.window()),
        machine.stats.middle_steps,
        machine.stats.double_steps,
        id,
    );
    Ok(())
}
