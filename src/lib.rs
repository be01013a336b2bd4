//! Deterministic, collision-free short tokens for sequential ids.
//!
//! Incrementing database ids make guessable URLs. This crate reversibly
//! shuffles the low bits of an id and renders the result in a custom base, so
//! consecutive ids come out as unrelated-looking short strings, with no
//! lookup table and no stored state. The same id always yields the same
//! token, distinct ids always yield distinct tokens, and every token decodes
//! back to its id.
//!
//! Basic usage:
//!
//! ```
//! // default configuration: base-31 alphabet, 24-bit shuffle
//! assert_eq!(squrl::encode_url(10), "csqsc");
//! assert_eq!(squrl::decode_url("csqsc"), Ok(10));
//!
//! // or pick your own alphabet and block size
//! let encoder = squrl::UrlEncoder::new("0123456789abcdef", 16, 4).unwrap();
//! let token = encoder.encode_url(42);
//! assert_eq!(encoder.decode_url(&token), Ok(42));
//! ```

use std::sync::OnceLock;

pub mod alphabet;
pub mod encoder;
pub mod permuter;

pub use alphabet::{Alphabet, AlphabetError, DecodeError};
pub use encoder::{Error, UrlEncoder};
pub use permuter::{BitPermuter, PermuterError};

/// Shuffled, prime-length (31 characters) to avoid periodicity artifacts.
pub const DEFAULT_ALPHABET: &str = "mn6j2c4rv8bpygw95z7hsdaetxuk3fq";
pub const DEFAULT_BLOCK_SIZE: u32 = 24;
pub const DEFAULT_MIN_LENGTH: usize = 4;

fn default_encoder() -> &'static UrlEncoder {
    static ENCODER: OnceLock<UrlEncoder> = OnceLock::new();
    ENCODER.get_or_init(UrlEncoder::default)
}

/// [`UrlEncoder::encode_url`] with the default configuration.
pub fn encode_url(n: u64) -> String {
    default_encoder().encode_url(n)
}

/// [`UrlEncoder::decode_url`] with the default configuration.
pub fn decode_url(s: &str) -> Result<u64, Error> {
    default_encoder().decode_url(s)
}
