//! Permutation cipher command.

use anyhow::{Context, Result};
use clap::Args;

use classic_crypto::PermutationCipher;

use super::CommandExecutor;

/// Permute the characters of each block of the text.
#[derive(Args, Debug)]
pub struct PermuteCommand {
    /// Comma separated permutation, e.g. 2,1,0
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub key: Vec<usize>,

    /// Padding character for a short final block
    #[arg(short, long, conflicts_with = "decrypt")]
    pub pad: Option<char>,

    /// Apply the inverse permutation
    #[arg(short, long)]
    pub decrypt: bool,

    /// Text to permute
    pub text: String,
}

impl CommandExecutor for PermuteCommand {
    fn output(&self) -> Result<String> {
        let cipher = PermutationCipher::try_with(self.key.clone()).context("Invalid permutation key")?;
        let output = if self.decrypt {
            cipher.decrypt(&self.text)?
        } else {
            cipher.encrypt(&self.text, self.pad)?
        };
        Ok(output)
    }
}
