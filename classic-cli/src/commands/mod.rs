//! Command module - one struct per subcommand.
//!
//! Each command holds its parsed arguments and implements `CommandExecutor`.

mod code;
mod hill;
mod permute;
mod stats;

pub use code::{DecodeCommand, EncodeCommand};
pub use hill::{HillDecryptCommand, HillEncryptCommand, HillKeygenCommand};
pub use permute::PermuteCommand;
pub use stats::StatsCommand;

use anyhow::Result;

pub trait CommandExecutor {
    /// Runs the command and returns what it prints.
    fn output(&self) -> Result<String>;

    fn execute(&self) -> Result<()> {
        println!("{}", self.output()?);
        Ok(())
    }
}
