//! Hill cipher commands - encrypt, decrypt and key generation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use classic_crypto::HillCipher;
use classic_crypto::preset::alphabets::LATIN_UPPERCASE;
use classic_crypto::stats::clean_text;

use super::CommandExecutor;
use crate::config::KeyFile;

#[derive(Args, Debug)]
pub struct HillArgs {
    /// Path to the JSON key file
    #[arg(short, long)]
    pub key: PathBuf,

    /// Padding symbol for a short final block (overrides the key file)
    #[arg(short, long)]
    pub pad: Option<char>,

    /// Use the text as is instead of uppercasing it and dropping non-letters
    #[arg(long)]
    pub raw: bool,

    /// Text to transform
    pub text: String,
}

enum Direction {
    Encrypt,
    Decrypt,
}

impl HillArgs {
    fn transform(&self, direction: Direction) -> Result<String> {
        let mut key_file = KeyFile::load(&self.key)?;
        if self.pad.is_some() {
            key_file.padding = self.pad;
        }

        let code = key_file.code()?;
        let cipher = key_file.cipher()?;
        let padding = key_file.padding_value(&code)?;

        let text = if self.raw {
            self.text.clone()
        } else {
            clean_text(&self.text)
        };
        let input = code.encode(&text).context("Text contains symbols outside the alphabet")?;

        let output = match direction {
            Direction::Encrypt => cipher.encrypt(&input, padding),
            Direction::Decrypt => cipher.decrypt(&input, padding),
        }?;

        Ok(code.decode(&output)?)
    }
}

/// Encrypt text with a Hill key file.
#[derive(Args, Debug)]
pub struct HillEncryptCommand {
    #[command(flatten)]
    pub args: HillArgs,
}

impl CommandExecutor for HillEncryptCommand {
    fn output(&self) -> Result<String> {
        self.args.transform(Direction::Encrypt)
    }
}

/// Decrypt text with a Hill key file.
#[derive(Args, Debug)]
pub struct HillDecryptCommand {
    #[command(flatten)]
    pub args: HillArgs,
}

impl CommandExecutor for HillDecryptCommand {
    fn output(&self) -> Result<String> {
        self.args.transform(Direction::Decrypt)
    }
}

/// Generate a random invertible Hill key and print it as a key file.
#[derive(Args, Debug)]
pub struct HillKeygenCommand {
    /// Block size (matrix dimension)
    #[arg(short, long)]
    pub size: usize,

    /// Modulus; defaults to 26, or to the alphabet length when --alphabet is given
    #[arg(short, long, conflicts_with = "alphabet")]
    pub modulus: Option<u64>,

    /// Alphabet to store in the key file
    #[arg(short, long)]
    pub alphabet: Option<String>,

    /// Padding symbol to store in the key file
    #[arg(short, long)]
    pub padding: Option<char>,

    /// Seed for a reproducible key
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CommandExecutor for HillKeygenCommand {
    fn output(&self) -> Result<String> {
        let (modulus, alphabet) = match (&self.alphabet, self.modulus) {
            (Some(alphabet), _) => (alphabet.chars().count() as u64, alphabet.clone()),
            (None, None) | (None, Some(26)) => (26, LATIN_UPPERCASE.to_string()),
            (None, Some(modulus)) => {
                bail!("Pass --alphabet with {} symbols to use modulus {}", modulus, modulus)
            }
        };

        let cipher = match self.seed {
            Some(seed) => HillCipher::random(self.size, modulus, &mut StdRng::seed_from_u64(seed)),
            None => HillCipher::random(self.size, modulus, &mut rand::rng()),
        }
        .context("Failed to generate a key")?;
        info!("Generated {}x{} key mod {}", self.size, self.size, modulus);

        let key_file = KeyFile {
            key: cipher.key_config(),
            alphabet,
            padding: self.padding,
        };
        let code = key_file.code()?;
        key_file.padding_value(&code)?;

        Ok(serde_json::to_string_pretty(&key_file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    fn key_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    fn args(file: &NamedTempFile, text: &str) -> HillArgs {
        HillArgs {
            key: file.path().to_path_buf(),
            pad: None,
            raw: false,
            text: text.into(),
        }
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let file = key_file(r#"{"modulus": 26, "matrix": [[3, 3], [2, 5]]}"#);

        let encrypt = HillEncryptCommand { args: args(&file, "Help me, please!") };
        let ciphertext = encrypt.output().unwrap();
        assert_eq!(ciphertext, "HIATWSAHMIOE");

        let decrypt = HillDecryptCommand { args: args(&file, &ciphertext) };
        assert_eq!(decrypt.output().unwrap(), "HELPMEPLEASE");
    }

    #[test]
    fn test_padding_from_flag_and_file() {
        let file = key_file(r#"{"modulus": 26, "matrix": [[3, 3], [2, 5]]}"#);
        let odd = HillEncryptCommand { args: args(&file, "ABC") };
        assert!(odd.output().is_err());

        let padded = HillEncryptCommand {
            args: HillArgs { pad: Some('X'), ..args(&file, "ABC") },
        };
        assert_eq!(padded.output().unwrap().len(), 4);

        let with_padding = key_file(r#"{"modulus": 26, "matrix": [[3, 3], [2, 5]], "padding": "X"}"#);
        let from_file = HillEncryptCommand { args: args(&with_padding, "ABC") };
        assert_eq!(from_file.output().unwrap(), padded.output().unwrap());
    }

    #[test]
    fn test_raw_text_must_be_in_alphabet() {
        let file = key_file(r#"{"modulus": 26, "matrix": [[3, 3], [2, 5]]}"#);
        let raw = HillEncryptCommand {
            args: HillArgs { raw: true, ..args(&file, "ab") },
        };
        assert!(raw.output().is_err());
    }

    #[test]
    fn test_keygen_is_reproducible_with_seed() {
        let keygen = HillKeygenCommand {
            size: 3,
            modulus: None,
            alphabet: None,
            padding: Some('X'),
            seed: Some(7),
        };
        let first = keygen.output().unwrap();
        assert_eq!(first, keygen.output().unwrap());

        let parsed: KeyFile = serde_json::from_str(&first).unwrap();
        assert_eq!(parsed.key.modulus, 26);
        assert_eq!(parsed.alphabet, LATIN_UPPERCASE);
        assert_eq!(parsed.padding, Some('X'));
        assert_eq!(parsed.cipher().unwrap().block_size(), 3);
    }

    #[test]
    fn test_keygen_modulus_from_alphabet() {
        let keygen = HillKeygenCommand {
            size: 2,
            modulus: None,
            alphabet: Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ.,?".into()),
            padding: None,
            seed: Some(1),
        };
        let parsed: KeyFile = serde_json::from_str(&keygen.output().unwrap()).unwrap();
        assert_eq!(parsed.key.modulus, 29);
        assert!(parsed.code().is_ok());
    }

    #[test]
    fn test_keygen_rejects_modulus_without_alphabet() {
        let keygen = HillKeygenCommand {
            size: 2,
            modulus: Some(29),
            alphabet: None,
            padding: None,
            seed: Some(1),
        };
        assert!(keygen.output().is_err());
    }
}
