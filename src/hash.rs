use fnv::FnvHasher;
use murmur3::murmur3_32;
use std::hash::Hasher;
use std::io::Cursor;

/// A type alias for the base hash functions used by the Bloom filter.
///
/// **Parameters:**
///
/// - `item: &[u8]`
///   - A byte slice representing the item to be hashed.
///
/// **Returns:**
///
/// - `u64`
///   - The digest of the item. Narrower hashes are widened without
///     sign extension.
///
/// **Usage:**
///
/// The filter takes two of these and combines them with double hashing
/// (`h1 + round * h2`), so the pair should come from different hash
/// families. Both must be stable across process runs.
pub type HashFunction = fn(&[u8]) -> u64;

/// MurmurHash3 (x86, 32-bit, seed 0).
pub fn hash_murmur32(key: &[u8]) -> u64 {
    let mut cursor = Cursor::new(key);
    murmur3_32(&mut cursor, 0).expect("Failed to compute Murmur3 hash") as u64
}

/// FNV-1a, 64-bit.
pub fn hash_fnv64(key: &[u8]) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(key);
    hasher.finish()
}

/// Double hashing: `(h1 + round * h2) mod bit_count`, wrapping on overflow.
pub(crate) fn combine(h1: u64, h2: u64, round: usize, bit_count: usize) -> usize {
    let combined = h1.wrapping_add((round as u64).wrapping_mul(h2));
    (combined % bit_count as u64) as usize
}

/// Bit array size for `n` items at false positive rate `fpr`.
///
/// The result is truncated toward zero rather than rounded up.
pub fn optimal_bit_vector_size(n: usize, fpr: f64) -> usize {
    let ln2 = std::f64::consts::LN_2;
    (-(n as f64 * fpr.ln()) / (ln2 * ln2)) as usize
}

/// Number of bit positions touched per item, truncated toward zero.
pub fn optimal_num_hashes(fpr: f64) -> usize {
    (-fpr.log2()) as usize
}
