//! # Hill cipher
//!
//! Block encryption of integer sequences by left multiplication of column
//! vectors with an invertible n×n matrix over Z/NZ.

pub mod config;

pub use config::HillKeyConfig;

use crate::errors::ClassicCryptoError;
use crate::ring::matrix_ops::{matrix_inverse, matrix_vector_mul, square_dimension};
use crate::ring::{Matrix, ModularMatrix, Ring, Vector};

use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;
use serde::Serialize;

use std::fmt;

/// Upper bound on random draws in [`HillCipher::random`].
const MAX_KEY_ATTEMPTS: usize = 10_000;

/// The Hill cipher given by a key matrix in GL_n(Z/NZ) and its inverse.
///
/// Immutable once built: `encryption_matrix · decryption_matrix ≡ I (mod N)`
/// holds for every instance.
///
/// # Example
///
/// ```
/// # use classic_crypto::hill::HillCipher;
/// let cipher = HillCipher::try_with(&vec![vec![1, 2], vec![3, 4]], 3, false).unwrap();
/// let plaintext = vec![0, 0, 0, 1, 1, 1, 2, 2];
/// let ciphertext = cipher.encrypt(&plaintext, None).unwrap();
/// assert_eq!(ciphertext, vec![0, 0, 2, 1, 0, 1, 0, 2]);
/// assert_eq!(cipher.decrypt(&ciphertext, None).unwrap(), plaintext);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HillCipher {
    ring: Ring,
    encryption_matrix: Matrix,
    decryption_matrix: Matrix,
}

impl HillCipher {
    /// Builds a cipher from an integer matrix and a modulus.
    ///
    /// The matrix is reduced mod `modulus` and inverted. With
    /// `use_as_decryption_key` the supplied matrix becomes the decryption key
    /// and its inverse the encryption key.
    ///
    /// # Errors
    ///
    /// - `InvalidModulus` if `modulus < 2`.
    /// - `DimensionMismatch` if the matrix is empty or not square.
    /// - `NotInvertible` if the determinant is not a unit mod `modulus`.
    pub fn try_with(
        matrix: &Matrix,
        modulus: u64,
        use_as_decryption_key: bool,
    ) -> Result<Self, ClassicCryptoError> {
        let ring = Ring::try_with(modulus)?;
        Self::from_ring(ring, matrix, use_as_decryption_key)
    }

    /// Builds a cipher from a matrix already defined over Z/NZ, taking `N`
    /// from the matrix's characteristic.
    ///
    /// # Errors
    ///
    /// Returns `NoModulus` for a matrix over the integers, otherwise as [`HillCipher::try_with`].
    pub fn try_from_modular(
        matrix: &ModularMatrix,
        use_as_decryption_key: bool,
    ) -> Result<Self, ClassicCryptoError> {
        let ring = matrix.ring()?;
        Self::from_ring(ring, matrix.entries(), use_as_decryption_key)
    }

    fn from_ring(
        ring: Ring,
        matrix: &Matrix,
        use_as_decryption_key: bool,
    ) -> Result<Self, ClassicCryptoError> {
        let n = square_dimension(matrix)?;
        let key = ring.normalize_matrix(matrix);
        let inverse = matrix_inverse(&key, &ring)?;

        let (encryption_matrix, decryption_matrix) = if use_as_decryption_key {
            (inverse, key)
        } else {
            (key, inverse)
        };
        debug!(
            "Built Hill cipher: block size {}, modulus {}, supplied key used for {}",
            n,
            ring.modulus(),
            if use_as_decryption_key { "decryption" } else { "encryption" }
        );

        Ok(Self {
            ring,
            encryption_matrix,
            decryption_matrix,
        })
    }

    /// Draws uniformly random `block_size`×`block_size` matrices mod `modulus`
    /// until one is invertible.
    ///
    /// # Errors
    ///
    /// - `InvalidParameters` if `block_size == 0` or no invertible matrix was drawn in time.
    /// - `InvalidModulus` if `modulus < 2`.
    pub fn random<R: Rng>(
        block_size: usize,
        modulus: u64,
        rng: &mut R,
    ) -> Result<Self, ClassicCryptoError> {
        if block_size == 0 {
            return Err(ClassicCryptoError::InvalidParameters(
                "block size must be at least 1".into(),
            ));
        }
        let ring = Ring::try_with(modulus)?;

        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let candidate: Matrix = (0..block_size)
                .map(|_| {
                    (0..block_size)
                        .map(|_| rng.random_range(0..modulus) as i64)
                        .collect()
                })
                .collect();

            match Self::from_ring(ring, &candidate, false) {
                Ok(cipher) => {
                    debug!("Random Hill key found after {} attempt(s)", attempt);
                    return Ok(cipher);
                }
                Err(ClassicCryptoError::NotInvertible { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(ClassicCryptoError::InvalidParameters(format!(
            "could not generate an invertible {}×{} matrix mod {} after {} tries",
            block_size, block_size, modulus, MAX_KEY_ATTEMPTS
        )))
    }

    /// The number of integers consumed per block, i.e. the key dimension.
    pub fn block_size(&self) -> usize {
        self.encryption_matrix.len()
    }

    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    /// A copy of the encryption matrix.
    pub fn encryption_key(&self) -> Matrix {
        self.encryption_matrix.clone()
    }

    /// A copy of the decryption matrix.
    pub fn decryption_key(&self) -> Matrix {
        self.decryption_matrix.clone()
    }

    /// The key in its serializable form; building a cipher from it yields `self` again.
    pub fn key_config(&self) -> HillKeyConfig {
        HillKeyConfig {
            modulus: self.modulus(),
            matrix: self.encryption_key(),
            use_as_decryption_key: false,
        }
    }

    /// Encrypts `plaintext` block by block with the encryption matrix.
    ///
    /// A short final block is right-padded with `padding`; without it the call
    /// fails with `PaddingRequired`. Every input value and the padding value
    /// must lie in `[0, N)` (`ValueOutOfRange` otherwise).
    pub fn encrypt(&self, plaintext: &[i64], padding: Option<i64>) -> Result<Vector, ClassicCryptoError> {
        self.apply_key(&self.encryption_matrix, plaintext, padding)
    }

    /// Decrypts `ciphertext` block by block with the decryption matrix.
    ///
    /// Same block and padding rules as [`HillCipher::encrypt`].
    pub fn decrypt(&self, ciphertext: &[i64], padding: Option<i64>) -> Result<Vector, ClassicCryptoError> {
        self.apply_key(&self.decryption_matrix, ciphertext, padding)
    }

    fn apply_key(
        &self,
        key: &Matrix,
        input: &[i64],
        padding: Option<i64>,
    ) -> Result<Vector, ClassicCryptoError> {
        if input.is_empty() {
            return Ok(Vector::new());
        }

        if let Some(&value) = input
            .iter()
            .chain(padding.as_ref())
            .find(|&&v| !self.ring.contains(v))
        {
            return Err(ClassicCryptoError::ValueOutOfRange {
                value,
                modulus: self.modulus(),
            });
        }

        let n = self.block_size();
        let mut output = Vector::with_capacity(input.len().div_ceil(n) * n);
        for (index, chunk) in input.chunks(n).enumerate() {
            let block: Vector = match padding {
                _ if chunk.len() == n => chunk.to_vec(),
                Some(pad) => chunk.iter().copied().pad_using(n, |_| pad).collect(),
                None => {
                    return Err(ClassicCryptoError::PaddingRequired {
                        chunk: chunk.to_vec(),
                        block_size: n,
                    });
                }
            };

            let transformed = matrix_vector_mul(key, &block, &self.ring)?;
            trace!("block {}: {:?} -> {:?}", index, block, transformed);
            output.extend(transformed);
        }

        Ok(output)
    }
}

impl fmt::Display for HillCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The Hill cipher given by (left) matrix multiplication by a matrix in GL_{}(Z/{})",
            self.block_size(),
            self.modulus()
        )
    }
}
