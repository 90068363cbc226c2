//! Encode and decode commands - text to alphabet positions and back.

use anyhow::{Context, Result};
use clap::Args;
use itertools::Itertools;

use classic_crypto::AlphabetCode;
use classic_crypto::preset::alphabets::LATIN_UPPERCASE;
use classic_crypto::stats::clean_text;

use super::CommandExecutor;

/// Translate text to the positions of its characters in an alphabet.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Alphabet defining the code (position = value)
    #[arg(short, long, default_value = LATIN_UPPERCASE)]
    pub alphabet: String,

    /// Uppercase the text and drop everything but letters first
    #[arg(short, long)]
    pub clean: bool,

    /// Text to encode
    pub text: String,
}

impl CommandExecutor for EncodeCommand {
    fn output(&self) -> Result<String> {
        let code = AlphabetCode::try_with(&self.alphabet, 1).context("Invalid alphabet")?;
        let text = if self.clean {
            clean_text(&self.text)
        } else {
            self.text.clone()
        };

        let numbers = code.encode(&text)?;
        Ok(numbers.iter().join(" "))
    }
}

/// Translate alphabet positions back to text.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Alphabet defining the code (position = value)
    #[arg(short, long, default_value = LATIN_UPPERCASE)]
    pub alphabet: String,

    /// Numbers to decode
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i64>,
}

impl CommandExecutor for DecodeCommand {
    fn output(&self) -> Result<String> {
        let code = AlphabetCode::try_with(&self.alphabet, 1).context("Invalid alphabet")?;
        Ok(code.decode(&self.numbers)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode() {
        let encode = EncodeCommand {
            alphabet: "ABCDE".into(),
            clean: false,
            text: "AAABCEE".into(),
        };
        assert_eq!(encode.output().unwrap(), "0 0 0 1 2 4 4");

        let decode = DecodeCommand {
            alphabet: "ABCDE".into(),
            numbers: vec![0, 0, 0, 1, 2, 4, 4],
        };
        assert_eq!(decode.output().unwrap(), "AAABCEE");
    }

    #[test]
    fn test_clean_flag() {
        let encode = EncodeCommand {
            alphabet: LATIN_UPPERCASE.into(),
            clean: true,
            text: "a b, c".into(),
        };
        assert_eq!(encode.output().unwrap(), "0 1 2");

        let raw = EncodeCommand { clean: false, ..encode };
        assert!(raw.output().is_err());
    }

    #[test]
    fn test_decode_out_of_range() {
        let decode = DecodeCommand {
            alphabet: "AB".into(),
            numbers: vec![-1],
        };
        assert!(decode.output().is_err());
    }
}
