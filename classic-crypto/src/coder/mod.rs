//! Translation between text over a fixed alphabet and integer code words.

use crate::errors::ClassicCryptoError;
use crate::ring::Vector;

use std::collections::HashMap;
use std::fmt;

/// A code which translates characters of a given alphabet to their
/// zero-based position in it, and back.
///
/// # Example
///
/// ```
/// # use classic_crypto::coder::AlphabetCode;
/// let code = AlphabetCode::try_with("ABCDE", 1).unwrap();
/// assert_eq!(code.encode("AAABCEE").unwrap(), vec![0, 0, 0, 1, 2, 4, 4]);
/// assert_eq!(code.decode(&[0, 0, 0, 1, 2, 4, 4]).unwrap(), "AAABCEE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetCode {
    alphabet: Vec<char>,
    index: HashMap<char, usize>,
    word_length: usize,
}

impl AlphabetCode {
    /// Builds a code over `alphabet`.
    ///
    /// # Errors
    ///
    /// - `NotImplemented` if `word_length != 1`; multi-character code words are not supported.
    /// - `DuplicateSymbol` if a character occurs twice in `alphabet`.
    /// - `InvalidParameters` if `alphabet` is empty.
    pub fn try_with(alphabet: &str, word_length: usize) -> Result<Self, ClassicCryptoError> {
        if word_length != 1 {
            return Err(ClassicCryptoError::NotImplemented(format!(
                "code words of length {} (only length 1 is supported)",
                word_length
            )));
        }
        if alphabet.is_empty() {
            return Err(ClassicCryptoError::InvalidParameters(
                "alphabet must contain at least one character".into(),
            ));
        }

        let alphabet: Vec<char> = alphabet.chars().collect();
        let mut index = HashMap::with_capacity(alphabet.len());
        for (position, &symbol) in alphabet.iter().enumerate() {
            if index.insert(symbol, position).is_some() {
                return Err(ClassicCryptoError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self {
            alphabet,
            index,
            word_length,
        })
    }

    /// Builds a code from an alphabet already known to be non-empty and duplicate free.
    pub(crate) fn from_unique_symbols(alphabet: &str) -> Self {
        let alphabet: Vec<char> = alphabet.chars().collect();
        let index = alphabet
            .iter()
            .enumerate()
            .map(|(position, &symbol)| (symbol, position))
            .collect();

        Self {
            alphabet,
            index,
            word_length: 1,
        }
    }

    pub fn alphabet(&self) -> String {
        self.alphabet.iter().collect()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Translates `text` to the list of alphabet positions of its characters.
    ///
    /// No case folding or stripping happens here; callers clean their text first.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` for the first character not in the alphabet.
    pub fn encode(&self, text: &str) -> Result<Vector, ClassicCryptoError> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.index
                    .get(&symbol)
                    .map(|&i| i as i64)
                    .ok_or(ClassicCryptoError::UnknownSymbol { symbol, position })
            })
            .collect()
    }

    /// Translates alphabet positions back to text.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for the first number outside `[0, len)`.
    pub fn decode(&self, numbers: &[i64]) -> Result<String, ClassicCryptoError> {
        numbers
            .iter()
            .map(|&index| {
                usize::try_from(index)
                    .ok()
                    .and_then(|i| self.alphabet.get(i).copied())
                    .ok_or(ClassicCryptoError::IndexOutOfRange {
                        index,
                        len: self.alphabet.len(),
                    })
            })
            .collect()
    }
}

impl fmt::Display for AlphabetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A code of word length {} based on the string: {}",
            self.word_length,
            self.alphabet()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn abcde() -> AlphabetCode {
        AlphabetCode::try_with("ABCDE", 1).unwrap()
    }

    #[test]
    fn test_encode_decode_example() {
        let code = abcde();
        let numbers = code.encode("AAABCEE").unwrap();
        assert_eq!(numbers, vec![0, 0, 0, 1, 2, 4, 4]);
        assert_eq!(code.decode(&numbers).unwrap(), "AAABCEE");
    }

    #[test]
    fn test_empty_text() {
        let code = abcde();
        assert_eq!(code.encode("").unwrap(), Vector::new());
        assert_eq!(code.decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_unknown_symbol() {
        let code = abcde();
        match code.encode("ABa") {
            Err(ClassicCryptoError::UnknownSymbol { symbol, position }) => {
                assert_eq!(symbol, 'a');
                assert_eq!(position, 2);
            }
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
        assert!(code.encode("A B").is_err());
    }

    #[test]
    fn test_index_out_of_range() {
        let code = abcde();
        assert!(matches!(
            code.decode(&[0, 5]),
            Err(ClassicCryptoError::IndexOutOfRange { index: 5, len: 5 })
        ));
        assert!(matches!(
            code.decode(&[-1]),
            Err(ClassicCryptoError::IndexOutOfRange { index: -1, .. })
        ));
    }

    #[test]
    fn test_word_length_other_than_one_is_rejected() {
        assert!(matches!(
            AlphabetCode::try_with("ABCDE", 2),
            Err(ClassicCryptoError::NotImplemented(_))
        ));
        assert!(matches!(
            AlphabetCode::try_with("ABCDE", 0),
            Err(ClassicCryptoError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_duplicate_symbol_is_rejected() {
        assert!(matches!(
            AlphabetCode::try_with("ABCA", 1),
            Err(ClassicCryptoError::DuplicateSymbol { symbol: 'A' })
        ));
        assert!(AlphabetCode::try_with("", 1).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            abcde().to_string(),
            "A code of word length 1 based on the string: ABCDE"
        );
    }

    #[test]
    fn test_non_ascii_alphabet() {
        let code = AlphabetCode::try_with("АБВГҐ", 1).unwrap();
        assert_eq!(code.len(), 5);
        assert_eq!(code.encode("ҐА").unwrap(), vec![4, 0]);
        assert!(code.contains('Б'));
    }

    #[quickcheck]
    fn prop_decode_inverts_encode(indices: Vec<u8>) -> TestResult {
        let code = AlphabetCode::try_with("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 1).unwrap();
        let text: String = indices
            .iter()
            .map(|&i| (b'A' + i % 26) as char)
            .collect();

        match code.encode(&text).and_then(|numbers| code.decode(&numbers)) {
            Ok(decoded) => TestResult::from_bool(decoded == text),
            Err(e) => TestResult::error(e.to_string()),
        }
    }
}
