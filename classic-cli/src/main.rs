//! Command line front end for the classic-crypto library.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CommandExecutor, DecodeCommand, EncodeCommand, HillDecryptCommand, HillEncryptCommand,
    HillKeygenCommand, PermuteCommand, StatsCommand,
};

#[derive(Parser)]
#[command(name = "classic-crypto")]
#[command(version)]
#[command(about = "Hill and permutation ciphers over a finite alphabet")]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Text to alphabet positions
    Encode(EncodeCommand),
    /// Alphabet positions to text
    Decode(DecodeCommand),
    /// Encrypt with a Hill key file
    HillEncrypt(HillEncryptCommand),
    /// Decrypt with a Hill key file
    HillDecrypt(HillDecryptCommand),
    /// Generate a random Hill key file
    HillKeygen(HillKeygenCommand),
    /// Permutation cipher
    Permute(PermuteCommand),
    /// Letter and fragment frequencies
    Stats(StatsCommand),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::HillEncrypt(cmd) => cmd.execute(),
        Commands::HillDecrypt(cmd) => cmd.execute(),
        Commands::HillKeygen(cmd) => cmd.execute(),
        Commands::Permute(cmd) => cmd.execute(),
        Commands::Stats(cmd) => cmd.execute(),
    }
}
