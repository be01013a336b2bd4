use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet needs at least 2 characters, got {len}")]
    TooFewChars { len: usize },
    #[error("alphabet contains duplicate character {ch:?}")]
    DuplicateChar { ch: char },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty string is not a valid encoding")]
    EmptyInput,
    #[error("character {ch:?} is not in the alphabet")]
    UnknownChar { ch: char },
    #[error("numeral does not fit into 64 bits")]
    Overflow,
}

/// Digit symbols for positional notation in base `len()`.
///
/// Character order defines digit values: `chars[0]` is zero. An alphabet with
/// a prime number of characters avoids periodicity artifacts in the output,
/// but any set of at least 2 unique characters works.
#[derive(Clone, Debug)]
pub struct Alphabet {
    chars: Vec<char>,
    values: HashMap<char, u64>,
}

impl Alphabet {
    pub fn new(chars: &str) -> Result<Self, AlphabetError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.len() < 2 {
            return Err(AlphabetError::TooFewChars { len: chars.len() });
        }
        let mut values = HashMap::with_capacity(chars.len());
        for (value, &ch) in chars.iter().enumerate() {
            if values.insert(ch, value as u64).is_some() {
                return Err(AlphabetError::DuplicateChar { ch });
            }
        }
        Ok(Self { chars, values })
    }

    /// The radix, i.e. the number of characters.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// The zero digit, used for left-padding.
    pub fn zero_char(&self) -> char {
        self.chars[0]
    }

    /// Shortest base-N representation of `x`, most significant digit first.
    pub fn enbase(&self, x: u64) -> String {
        let radix = self.chars.len() as u64;
        let mut x = x;
        let mut digits = Vec::new();
        loop {
            digits.push(self.chars[(x % radix) as usize]);
            x /= radix;
            if x == 0 {
                break;
            }
        }
        digits.iter().rev().collect()
    }

    /// Parse a base-N numeral back into an integer.
    ///
    /// Rejects empty input and characters outside the alphabet, so foreign
    /// tokens fail instead of decoding to a wrong id.
    pub fn debase(&self, s: &str) -> Result<u64, DecodeError> {
        if s.is_empty() {
            return Err(DecodeError::EmptyInput);
        }
        let radix = self.chars.len() as u64;
        let mut result: u64 = 0;
        for ch in s.chars() {
            let value = *self
                .values
                .get(&ch)
                .ok_or(DecodeError::UnknownChar { ch })?;
            result = result
                .checked_mul(radix)
                .and_then(|r| r.checked_add(value))
                .ok_or(DecodeError::Overflow)?;
        }
        Ok(result)
    }
}
