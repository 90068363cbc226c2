//! Key file handling for the Hill commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use classic_crypto::preset::alphabets::LATIN_UPPERCASE;
use classic_crypto::{AlphabetCode, HillCipher, HillKeyConfig};

fn default_alphabet() -> String {
    LATIN_UPPERCASE.to_string()
}

/// A Hill key plus the alphabet used to turn text into numbers.
///
/// ```json
/// { "modulus": 26, "matrix": [[3, 3], [2, 5]], "alphabet": "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "padding": "X" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFile {
    #[serde(flatten)]
    pub key: HillKeyConfig,
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<char>,
}

impl KeyFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read key file {}", path.display()))?;
        let key_file: KeyFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse key file {}", path.display()))?;
        log::debug!("Loaded key file {}", path.display());
        Ok(key_file)
    }

    /// The alphabet code, checked against the key modulus.
    pub fn code(&self) -> Result<AlphabetCode> {
        let code = AlphabetCode::try_with(&self.alphabet, 1).context("Invalid alphabet in key file")?;
        if code.len() as u64 != self.key.modulus {
            bail!(
                "Alphabet has {} symbols but the key works mod {}",
                code.len(),
                self.key.modulus
            );
        }
        Ok(code)
    }

    pub fn cipher(&self) -> Result<HillCipher> {
        HillCipher::try_from(self.key.clone()).context("Invalid Hill key in key file")
    }

    /// The padding symbol as a number, if one is configured.
    pub fn padding_value(&self, code: &AlphabetCode) -> Result<Option<i64>> {
        self.padding
            .map(|symbol| code.encode(&symbol.to_string()).map(|values| values[0]))
            .transpose()
            .context("Padding symbol is not in the alphabet")
    }
}
