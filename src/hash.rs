//! djb2 string hash and slot reduction.
//!
//! `acc = acc * 33 + byte`, seeded with 5381. The accumulator is a `u64`
//! that wraps on overflow, so the reduction modulo capacity can never go
//! negative or out of range.

use core::hash::{BuildHasher, Hasher};

/// Initial accumulator value.
pub const DJB2_SEED: u64 = 5381;

/// Hash a byte string with djb2.
#[inline]
pub fn djb2(key: &[u8]) -> u64 {
    let mut h = Djb2Hasher::default();
    h.write(key);
    h.finish()
}

/// Map `key` to a slot in `[0, capacity)`.
///
/// Returns `None` for a zero capacity, which has no slots to map to.
#[inline]
pub fn slot_index(key: &[u8], capacity: usize) -> Option<usize> {
    reduce(djb2(key), capacity)
}

#[inline]
pub(crate) fn reduce(hash: u64, capacity: usize) -> Option<usize> {
    if capacity == 0 {
        return None;
    }
    // The remainder is below `capacity`, so it fits back into usize.
    Some((hash % capacity as u64) as usize)
}

/// Streaming djb2 state. Bytes fed through several `write` calls hash the
/// same as their concatenation.
#[derive(Clone, Copy, Debug)]
pub struct Djb2Hasher {
    acc: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { acc: DJB2_SEED }
    }
}

impl Hasher for Djb2Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.acc = self.acc.wrapping_mul(33).wrapping_add(u64::from(b));
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.acc
    }
}

/// `BuildHasher` producing fresh [`Djb2Hasher`]s; the table's default.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildDjb2;

impl BuildHasher for BuildDjb2 {
    type Hasher = Djb2Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Djb2Hasher::default()
    }
}
