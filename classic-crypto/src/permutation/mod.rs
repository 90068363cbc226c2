//! Transposition of characters inside fixed-size blocks.

use crate::errors::ClassicCryptoError;

use itertools::Itertools;
use log::debug;

use std::fmt;

/// A permutation cipher: inside every block of `n` characters, output
/// character `i` is input character `key[i]`.
///
/// # Example
///
/// ```
/// # use classic_crypto::permutation::PermutationCipher;
/// let cipher = PermutationCipher::try_with(vec![2, 1, 0]).unwrap();
/// assert_eq!(cipher.encrypt("HelloThere", Some('X')).unwrap(), "leHTolrehXXe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationCipher {
    key: Vec<usize>,
    inverse: Vec<usize>,
}

impl PermutationCipher {
    /// # Errors
    ///
    /// Returns `InvalidPermutation` unless `key` lists each of `0..key.len()` exactly once.
    pub fn try_with(key: Vec<usize>) -> Result<Self, ClassicCryptoError> {
        let n = key.len();
        if n == 0 {
            return Err(ClassicCryptoError::InvalidPermutation(key));
        }

        let mut inverse = vec![usize::MAX; n];
        for (position, &source) in key.iter().enumerate() {
            if source >= n || inverse[source] != usize::MAX {
                return Err(ClassicCryptoError::InvalidPermutation(key.clone()));
            }
            inverse[source] = position;
        }

        debug!("Built permutation cipher with key {:?}", key);
        Ok(Self { key, inverse })
    }

    pub fn block_size(&self) -> usize {
        self.key.len()
    }

    pub fn key(&self) -> &[usize] {
        &self.key
    }

    /// Permutes every block of `text`, padding a short final block with `padding`.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteBlock` if the final block is short and no padding was given.
    pub fn encrypt(&self, text: &str, padding: Option<char>) -> Result<String, ClassicCryptoError> {
        Self::permute(&self.key, text, padding)
    }

    /// Undoes [`PermutationCipher::encrypt`]. Padding added during encryption is kept.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteBlock` if the length of `text` is not a multiple of the block size.
    pub fn decrypt(&self, text: &str) -> Result<String, ClassicCryptoError> {
        Self::permute(&self.inverse, text, None)
    }

    fn permute(order: &[usize], text: &str, padding: Option<char>) -> Result<String, ClassicCryptoError> {
        let n = order.len();
        let chars: Vec<char> = text.chars().collect();

        let mut output = String::with_capacity(text.len() + n);
        for chunk in chars.chunks(n) {
            let block: Vec<char> = match padding {
                _ if chunk.len() == n => chunk.to_vec(),
                Some(pad) => chunk.iter().copied().pad_using(n, |_| pad).collect(),
                None => {
                    return Err(ClassicCryptoError::IncompleteBlock {
                        chunk: chunk.iter().collect(),
                        block_size: n,
                    });
                }
            };
            output.extend(order.iter().map(|&i| block[i]));
        }

        Ok(output)
    }
}

impl fmt::Display for PermutationCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Permutation cipher on blocks of {} given by {:?}",
            self.block_size(),
            self.key
        )
    }
}
