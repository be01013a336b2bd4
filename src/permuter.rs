use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermuterError {
    #[error("block size ({bits}) exceeds the 64-bit key width")]
    BlockTooWide { bits: u32 },
    #[error("permutation table is not a bijection on its block")]
    InvalidTable,
}

/// Reversible scramble of the low `block_size` bits of a `u64`.
///
/// Bits at positions >= `block_size` pass through both directions unchanged.
/// The permutation is stored together with its computed inverse, so tables
/// that are not self-inverse work too.
#[derive(Clone, Debug)]
pub struct BitPermuter {
    mask: u64,
    forward: Vec<u32>,
    inverse: Vec<u32>,
}

impl BitPermuter {
    /// Permuter with the default table: index reversal, bit `i` <-> bit `B - 1 - i`.
    ///
    /// A block size of 0 yields the identity permutation.
    pub fn reversal(block_size: u32) -> Result<Self, PermuterError> {
        let table = (0..block_size).rev().collect();
        Self::with_table(table)
    }

    /// Permuter with a custom table. `table[i]` is the destination of bit `i`;
    /// the table's length is the block size.
    pub fn with_table(table: Vec<u32>) -> Result<Self, PermuterError> {
        let bits = table.len() as u32;
        if bits > u64::BITS {
            return Err(PermuterError::BlockTooWide { bits });
        }
        if !table.iter().all_unique() || table.iter().any(|&dst| dst >= bits) {
            return Err(PermuterError::InvalidTable);
        }
        let mut inverse = vec![0; table.len()];
        for (i, &dst) in table.iter().enumerate() {
            inverse[dst as usize] = i as u32;
        }
        let mask = match bits {
            64 => u64::MAX,
            b => (1u64 << b) - 1,
        };
        Ok(Self {
            mask,
            forward: table,
            inverse,
        })
    }

    /// Apply the permutation to `key`.
    pub fn apply(&self, key: u64) -> u64 {
        (key & !self.mask) | scatter(key & self.mask, &self.forward)
    }

    /// Revert the permutation of `key`.
    pub fn revert(&self, key: u64) -> u64 {
        (key & !self.mask) | scatter(key & self.mask, &self.inverse)
    }

    pub fn mask(&self) -> u64 {
        self.mask
    }

    pub fn block_size(&self) -> u32 {
        self.forward.len() as u32
    }
}

/// Move bit `i` of `low` to bit `table[i]`, for every position in the block.
fn scatter(low: u64, table: &[u32]) -> u64 {
    let mut result = 0;
    for (i, &dst) in table.iter().enumerate() {
        if low & (1u64 << i) != 0 {
            result |= 1u64 << dst;
        }
    }
    result
}
