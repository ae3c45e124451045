// crates/enigma-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "enigma-cli")]
#[command(about = "Army Enigma I (three-wheel) simulator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encipher text (output in uppercase)
    Encrypt(cmd::cipher::CipherArgs),

    /// Decipher text (same machine, output in lowercase)
    Decrypt(cmd::cipher::CipherArgs),

    /// Key sheet and settings blob tools (.enk)
    Settings(cmd::settings::SettingsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encrypt(args) => cmd::cipher::run(args, cmd::cipher::Direction::Encrypt),
        Commands::Decrypt(args) => cmd::cipher::run(args, cmd::cipher::Direction::Decrypt),
        Commands::Settings(args) => cmd::settings::run(args),
    }
}
