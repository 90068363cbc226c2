use crate::errors::ClassicCryptoError;
use crate::hill::HillCipher;
use crate::ring::Matrix;

use serde::{Deserialize, Serialize};

/// Serializable description of a Hill key.
///
/// ```json
/// { "modulus": 26, "matrix": [[3, 3], [2, 5]], "use_as_decryption_key": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HillKeyConfig {
    pub modulus: u64,
    pub matrix: Matrix,
    #[serde(default)]
    pub use_as_decryption_key: bool,
}

impl HillKeyConfig {
    pub fn from_json(json: &str) -> Result<Self, ClassicCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ClassicCryptoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<HillKeyConfig> for HillCipher {
    type Error = ClassicCryptoError;

    fn try_from(config: HillKeyConfig) -> Result<Self, Self::Error> {
        HillCipher::try_with(&config.matrix, config.modulus, config.use_as_decryption_key)
    }
}
