//! Implementation of ring ops using modular arithmetic.

use crate::errors::ClassicCryptoError;

use super::helper::{extended_gcd, gcd};
use super::Matrix;

use serde::{Deserialize, Serialize};

/// Represents the finite ring Z/NZ.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and small enough to fit an `i64`.
    pub fn try_with(modulus: u64) -> Result<Self, ClassicCryptoError> {
        if modulus <= 1 {
            return Err(ClassicCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > i64::MAX as u64 {
            return Err(ClassicCryptoError::InvalidModulus(format!(
                "Modulus {} does not fit a signed 64-bit residue",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns `true` if `value` is already a canonical residue, i.e. lies in `[0, modulus)`.
    pub fn contains(&self, value: i64) -> bool {
        value >= 0 && (value as u64) < self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Reduces every entry of `matrix` to its canonical residue.
    pub fn normalize_matrix(&self, matrix: &Matrix) -> Matrix {
        matrix
            .iter()
            .map(|row| row.iter().map(|&v| self.normalize(v)).collect())
            .collect()
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let sum = self.normalize(a) as i128 + self.normalize(b) as i128;

        (sum % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(3, 5), 8);
    /// assert_eq!(ring.sub(-2, 3), 5);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.add(a, self.neg(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5);
    /// assert_eq!(ring.mul(-2, 6), 8);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        (product % self.modulus as i128) as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return 0;
        }

        self.modulus as i64 - a_norm
    }

    /// Returns `true` if `a` is a unit, i.e. `gcd(a, modulus) == 1`.
    pub fn is_unit(&self, a: i64) -> bool {
        gcd(self.normalize(a), self.modulus as i64) == 1
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidParameters` if `gcd(a, modulus) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 9); // 3 * 9 = 27 = 1 mod 26
    /// assert!(ring.inv(13).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ClassicCryptoError> {
        let a_norm = self.normalize(a);

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "{} has no inverse mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(2).is_ok());
        assert!(Ring::try_with(26).is_ok());
        assert!(Ring::try_with(1).is_err());
        assert!(Ring::try_with(0).is_err());
        assert!(Ring::try_with(u64::MAX).is_err());
    }

    #[test]
    fn test_contains() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(3)?;
        assert!(ring.contains(0));
        assert!(ring.contains(2));
        assert!(!ring.contains(3));
        assert!(!ring.contains(-1));
        Ok(())
    }

    #[test]
    fn test_arithmetic() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.add(5, 8), 2);
        assert_eq!(ring.sub(5, 8), 8);
        assert_eq!(ring.mul(5, 8), 7);
        assert_eq!(ring.mul(-2, 8), 6);
        assert_eq!(ring.neg(5), 6);
        assert_eq!(ring.neg(0), 0);
        assert_eq!(ring.neg(-5), 5);
        Ok(())
    }

    #[test]
    fn test_large_modulus_does_not_overflow() -> Result<(), ClassicCryptoError> {
        let m = (1u64 << 62) + 1;
        let ring = Ring::try_with(m)?;
        let a = (m - 1) as i64;
        assert_eq!(ring.mul(a, a), 1);
        assert_eq!(ring.add(a, a), (m - 2) as i64);
        Ok(())
    }

    #[test]
    fn test_inversion() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(26)?;
        for a in 0..26 {
            match ring.inv(a) {
                Ok(inv) => assert_eq!(ring.mul(a, inv), 1),
                Err(_) => assert!(!ring.is_unit(a)),
            }
        }
        assert_eq!(ring.inv(-1)?, 25);
        Ok(())
    }

    #[test]
    fn test_normalize_matrix() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(3)?;
        let m = vec![vec![1, 2], vec![3, -4]];
        assert_eq!(ring.normalize_matrix(&m), vec![vec![1, 2], vec![0, 2]]);
        Ok(())
    }
}
