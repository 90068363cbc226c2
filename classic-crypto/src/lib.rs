//! # classic-crypto
//!
//! Classical ciphers and text statistics for teaching: an alphabet coder,
//! the Hill cipher over Z/NZ, a block permutation cipher and fragment
//! frequency counts. None of it is secure.

pub mod coder;
pub mod errors;
pub mod hill;
pub mod permutation;
pub mod preset;
pub mod ring;
pub mod stats;

pub use coder::AlphabetCode;
pub use errors::ClassicCryptoError;
pub use hill::{HillCipher, HillKeyConfig};
pub use permutation::PermutationCipher;
