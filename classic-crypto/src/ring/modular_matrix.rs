use crate::errors::ClassicCryptoError;
use crate::ring::{Matrix, Ring};

use serde::{Deserialize, Serialize};

/// A matrix tagged with the characteristic of the ring its entries live in.
///
/// Characteristic `0` stands for the integers; any other value `N` means the
/// entries are residues in Z/NZ and are kept in `[0, N)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModularMatrix {
    entries: Matrix,
    characteristic: u64,
}

impl ModularMatrix {
    /// A matrix over the integers.
    pub fn over_integers(entries: Matrix) -> Self {
        Self {
            entries,
            characteristic: 0,
        }
    }

    /// A matrix over `ring`, with every entry reduced to its canonical residue.
    pub fn over(ring: &Ring, entries: &Matrix) -> Self {
        Self {
            entries: ring.normalize_matrix(entries),
            characteristic: ring.modulus(),
        }
    }

    pub fn characteristic(&self) -> u64 {
        self.characteristic
    }

    pub fn entries(&self) -> &Matrix {
        &self.entries
    }

    /// The ring the entries live in.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NoModulus` for a matrix over the integers.
    pub fn ring(&self) -> Result<Ring, ClassicCryptoError> {
        if self.characteristic == 0 {
            return Err(ClassicCryptoError::NoModulus);
        }

        Ring::try_with(self.characteristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_ring_reduces_entries() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(3)?;
        let m = ModularMatrix::over(&ring, &vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.characteristic(), 3);
        assert_eq!(m.entries(), &vec![vec![1, 2], vec![0, 1]]);
        assert_eq!(m.ring()?, ring);
        Ok(())
    }

    #[test]
    fn test_over_integers_has_no_ring() {
        let m = ModularMatrix::over_integers(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.characteristic(), 0);
        assert!(matches!(m.ring(), Err(ClassicCryptoError::NoModulus)));
    }
}
