//! Simple fixed-capacity Bloom filter.
//!
//! The filter is sized from two parameters: the number of items it should
//! hold and the target false positive rate. Queries never report a false
//! negative for an item that was inserted.
//!
//! HowTo:
//!    * Sizing: `m = -(n * ln p) / ln(2)^2` bits and `k = -log2(p)` hash rounds,
//!      both computed once at construction and truncated toward zero.
//!    * Positions: two base hashes (MurmurHash3 32-bit and FNV-1a 64-bit by
//!      default) are combined with double hashing, `(h1 + i * h2) mod m`,
//!      for each round `i` in `0..k`.
//!
//! Insertion:
//!     * Sets the `k` bits of the item and counts the call.
//!     * Refused with `false` once `n` insertions were accepted. Duplicates
//!       count against the limit.
//! Query:
//!     * `false` if any of the `k` bits is clear, `true` otherwise.
//!
//! Obvious problems:
//!     * No deletion and no resizing.
//!     * The counter tracks insert calls, not distinct items.
//!     * Rates above 0.5 give `k = 0`, so every query answers `true`.
//!
//! ```
//! use bfilter::BloomFilter;
//!
//! let mut filter = BloomFilter::new(30, Some(0.04))?;
//! assert!(filter.insert("Coke"));
//! assert!(filter.query("Coke"));
//! # Ok::<(), bfilter::BloomError>(())
//! ```

pub mod common;
mod error;
mod filter;
mod hash;

pub use error::{BloomError, Result};
pub use filter::{
    BloomFilter, DEFAULT_FALSE_POSITIVE_RATE, FilterConfig, FilterConfigBuilder,
    FilterConfigBuilderError,
};
pub use hash::{
    HashFunction, hash_fnv64, hash_murmur32, optimal_bit_vector_size,
    optimal_num_hashes,
};
