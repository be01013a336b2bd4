use thiserror::Error;

use crate::{
    alphabet::{Alphabet, AlphabetError, DecodeError},
    permuter::{BitPermuter, PermuterError},
    DEFAULT_ALPHABET, DEFAULT_BLOCK_SIZE, DEFAULT_MIN_LENGTH,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
    #[error("invalid permutation: {0}")]
    Permuter(#[from] PermuterError),
    #[error("invalid token: {0}")]
    Decode(#[from] DecodeError),
}

/// Bijective codec between ids and short opaque strings.
///
/// Composes a [`BitPermuter`] (to keep consecutive ids from producing
/// similar-looking tokens) with an [`Alphabet`] (to render the result in a
/// compact base). The whole configuration is fixed at construction, so
/// encoders are freely shared across threads, and encoders with different
/// configurations coexist without interference.
///
/// Tokens are only meaningful to an encoder with the same alphabet, block
/// size and permutation table. Anyone who knows the configuration can invert
/// the mapping, so this hides sequence, not data.
#[derive(Clone, Debug)]
pub struct UrlEncoder {
    alphabet: Alphabet,
    permuter: BitPermuter,
    min_length: usize,
}

impl UrlEncoder {
    /// Encoder with the default bit-reversal permutation.
    pub fn new(alphabet: &str, block_size: u32, min_length: usize) -> Result<Self, Error> {
        Ok(Self {
            alphabet: Alphabet::new(alphabet)?,
            permuter: BitPermuter::reversal(block_size)?,
            min_length,
        })
    }

    /// Encoder with a custom permutation table; the table's length is the
    /// block size.
    pub fn with_table(alphabet: &str, table: Vec<u32>, min_length: usize) -> Result<Self, Error> {
        Ok(Self {
            alphabet: Alphabet::new(alphabet)?,
            permuter: BitPermuter::with_table(table)?,
            min_length,
        })
    }

    /// Turn an id into a token: permute, then enbase, then left-pad with the
    /// alphabet's zero digit up to `min_length` characters.
    ///
    /// Padding with the zero digit adds no value, so it never affects
    /// [`decode_url`](Self::decode_url).
    pub fn encode_url(&self, n: u64) -> String {
        let mut token = self.enbase(self.encode(n));
        let len = token.chars().count();
        if len < self.min_length {
            let padding: String = std::iter::repeat(self.alphabet.zero_char())
                .take(self.min_length - len)
                .collect();
            token.insert_str(0, &padding);
        }
        token
    }

    /// Turn a token back into the id it was encoded from.
    pub fn decode_url(&self, s: &str) -> Result<u64, Error> {
        Ok(self.decode(self.debase(s)?))
    }

    /// The raw bit-permutation step, exposed for composability.
    pub fn encode(&self, n: u64) -> u64 {
        self.permuter.apply(n)
    }

    /// Inverse of [`encode`](Self::encode).
    pub fn decode(&self, n: u64) -> u64 {
        self.permuter.revert(n)
    }

    /// The raw base-conversion step, without permutation or padding.
    pub fn enbase(&self, x: u64) -> String {
        self.alphabet.enbase(x)
    }

    /// Inverse of [`enbase`](Self::enbase).
    pub fn debase(&self, s: &str) -> Result<u64, Error> {
        Ok(self.alphabet.debase(s)?)
    }
}

impl Default for UrlEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET, DEFAULT_BLOCK_SIZE, DEFAULT_MIN_LENGTH)
            .expect("default configuration is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_applied_up_to_min_length() {
        let encoder = UrlEncoder::default();
        let token = encoder.encode_url(0);
        assert_eq!(token, "mmmm");
        assert_eq!(encoder.decode_url(&token), Ok(0));
        // unpadded form decodes to the same id
        assert_eq!(encoder.decode_url("m"), Ok(0));
    }

    #[test]
    fn test_no_padding_above_min_length() {
        let encoder = UrlEncoder::default();
        assert_eq!(encoder.encode_url(10), "csqsc");
    }

    #[test]
    fn test_configurations_are_independent() {
        let a = UrlEncoder::new("0123456789", 8, 0).unwrap();
        let b = UrlEncoder::new("abcdefghijk", 16, 0).unwrap();
        for n in [0u64, 5, 300, 70_000] {
            assert_eq!(a.decode_url(&a.encode_url(n)), Ok(n));
            assert_eq!(b.decode_url(&b.encode_url(n)), Ok(n));
        }
        // a token from one configuration is foreign to the other
        assert_eq!(
            b.decode_url("42"),
            Err(Error::Decode(DecodeError::UnknownChar { ch: '4' }))
        );
    }

    #[test]
    fn test_construction_errors_are_wrapped() {
        assert!(matches!(
            UrlEncoder::new("aa", 24, 4),
            Err(Error::Alphabet(AlphabetError::DuplicateChar { ch: 'a' }))
        ));
        assert!(matches!(
            UrlEncoder::new("0123456789", 65, 4),
            Err(Error::Permuter(PermuterError::BlockTooWide { bits: 65 }))
        ));
    }
}
