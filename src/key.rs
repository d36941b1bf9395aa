//! Hashed translation keys.

use std::collections::HashMap;
use std::hash::{
    BuildHasherDefault,
    Hasher,
};

/// Fixed-width numeric surrogate for an original translation string.
///
/// The key is derived from the MD5 digest of the string's UTF-8 bytes:
/// the first four digest bytes, read as a little-endian `u32`. Both the
/// algorithm and the byte order are part of the contract — keys are
/// compared across builds and processes, so the mapping must be
/// identical on every platform.
///
/// Truncating the digest to 32 bits is not collision-free: two distinct
/// originals may map to the same key, in which case they silently share
/// a slot. For translation sets of realistic size the probability is
/// negligible, and fixed-width keys keep the lookup tables compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashedKey(
    /// Little-endian `u32` over the first four MD5 digest bytes.
    u32,
);

impl HashedKey {
    /// Hashes an original string into its fixed-width key.
    ///
    /// Deterministic and total: the same input always yields the same
    /// key, and any string — including the empty string — hashes to a
    /// valid key.
    #[must_use]
    pub fn of(value: &str) -> Self {
        let digest = md5::compute(value.as_bytes());
        let [b0, b1, b2, b3, ..] = digest.0;

        Self(u32::from_le_bytes([b0, b1, b2, b3]))
    }

    /// Returns the raw key value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HashedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Identity hasher for [`HashedKey`] maps.
///
/// The keys are already uniformly distributed digest prefixes, so
/// feeding them through SipHash again buys nothing on the lookup hot
/// path.
#[derive(Debug, Default)]
pub struct IdentityHasher(
    /// Accumulated hash value.
    u64,
);

impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        // Fallback for non-u32 writes; folds bytes to stay total.
        for (index, byte) in bytes.iter().enumerate() {
            self.0 ^= u64::from(*byte) << ((index % 8) * 8);
        }
    }

    fn write_u32(&mut self, i: u32) {
        self.0 = u64::from(i);
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Map from hashed keys to values, specialized to the identity hasher.
pub type KeyMap<V> = HashMap<HashedKey, V, BuildHasherDefault<IdentityHasher>>;
