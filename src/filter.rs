use crate::error::{BloomError, Result};
use crate::hash::{
    HashFunction, combine, hash_fnv64, hash_murmur32, optimal_bit_vector_size,
    optimal_num_hashes,
};
use bitvec::{bitvec, order::Lsb0, slice::BitSlice, vec::BitVec};
use derive_builder::Builder;
use std::fmt;
use tracing::{debug, trace, warn};

/// False positive rate used when none is given.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.3;

/// Configuration for a [`BloomFilter`]
#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct FilterConfig {
    /// Maximum number of insertions the filter accepts
    pub capacity: i64,

    /// Desired false positive rate (between 0 and 1, exclusive)
    #[builder(default = "DEFAULT_FALSE_POSITIVE_RATE")]
    pub false_positive_rate: f64,

    /// Base hash `h1` of the double hashing scheme
    #[builder(default = "hash_murmur32")]
    pub primary_hash: HashFunction,

    /// Base hash `h2` of the double hashing scheme
    #[builder(default = "hash_fnv64")]
    pub secondary_hash: HashFunction,
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity <= 0 {
            return Err(BloomError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        // Written as a negated range check so NaN is rejected too.
        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(BloomError::InvalidProbability {
                rate: self.false_positive_rate,
            });
        }
        Ok(())
    }
}

/// Fixed-capacity Bloom filter.
///
/// Sizing is derived once at construction: the bit array holds
/// `-(n * ln p) / ln(2)^2` bits and every item touches `-log2(p)` of them,
/// both truncated toward zero. Bit positions come from double hashing the
/// item with two independent base hashes.
///
/// Insertions are counted per call, duplicates included. Once `capacity`
/// insertions have been accepted the filter is full and refuses further
/// inserts; queries keep working.
///
/// The filter has no internal synchronization. Wrap it in a single lock
/// covering both `insert` and `query` to share it between threads.
pub struct BloomFilter {
    config: FilterConfig,
    capacity: usize,
    bit_count: usize,
    hash_rounds: usize,
    bits: BitVec<usize, Lsb0>,
    inserted_count: usize,
}

impl BloomFilter {
    /// Creates a filter for `capacity` items, falling back to
    /// [`DEFAULT_FALSE_POSITIVE_RATE`] when no rate is given.
    pub fn new(capacity: i64, false_positive_rate: Option<f64>) -> Result<Self> {
        let config = FilterConfig {
            capacity,
            false_positive_rate: false_positive_rate
                .unwrap_or(DEFAULT_FALSE_POSITIVE_RATE),
            primary_hash: hash_murmur32,
            secondary_hash: hash_fnv64,
        };
        Self::with_config(config)
    }

    pub fn with_config(config: FilterConfig) -> Result<Self> {
        config.validate()?;

        let capacity = usize::try_from(config.capacity).map_err(|_| {
            BloomError::InvalidCapacity {
                capacity: config.capacity,
            }
        })?;
        let bit_count =
            optimal_bit_vector_size(capacity, config.false_positive_rate);
        let max_bits = BitSlice::<usize, Lsb0>::MAX_BITS;
        if bit_count > max_bits {
            return Err(BloomError::CapacityTooLarge {
                capacity: config.capacity,
                bits: bit_count,
                max_bits,
            });
        }
        let hash_rounds = optimal_num_hashes(config.false_positive_rate);

        if hash_rounds == 0 {
            warn!(
                fpr = config.false_positive_rate,
                "zero hash rounds for this rate, every query will answer true"
            );
        }
        debug!(capacity, bit_count, hash_rounds, "created bloom filter");

        Ok(Self {
            config,
            capacity,
            bit_count,
            hash_rounds,
            bits: bitvec![usize, Lsb0; 0; bit_count],
            inserted_count: 0,
        })
    }

    /// Bit index of `item` for the given hash round.
    ///
    /// Always within `0..bit_count()`. `round` is normally below
    /// `hash_rounds()`, but any value yields a deterministic index.
    /// `None` when the filter has no bits, which only happens when
    /// `hash_rounds()` is also zero.
    pub fn position_for(
        &self,
        item: impl AsRef<[u8]>,
        round: usize,
    ) -> Option<usize> {
        if self.bit_count == 0 {
            return None;
        }
        let (h1, h2) = self.base_hashes(item.as_ref());
        Some(combine(h1, h2, round, self.bit_count))
    }

    /// Records `item`. Returns `false` without touching the filter once
    /// `capacity` insertions have been accepted.
    pub fn insert(&mut self, item: impl AsRef<[u8]>) -> bool {
        if self.is_full() {
            trace!(
                inserted = self.inserted_count,
                capacity = self.capacity,
                "insert refused, filter is full"
            );
            return false;
        }

        let (h1, h2) = self.base_hashes(item.as_ref());
        for round in 0..self.hash_rounds {
            let idx = combine(h1, h2, round, self.bit_count);
            self.bits.set(idx, true);
        }

        self.inserted_count += 1;
        true
    }

    /// `false` means the item was never inserted; `true` means it probably was.
    pub fn query(&self, item: impl AsRef<[u8]>) -> bool {
        let (h1, h2) = self.base_hashes(item.as_ref());
        (0..self.hash_rounds)
            .all(|round| self.bits[combine(h1, h2, round, self.bit_count)])
    }

    /// Same as [`query`](Self::query).
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        self.query(item)
    }

    fn base_hashes(&self, item: &[u8]) -> (u64, u64) {
        (
            (self.config.primary_hash)(item),
            (self.config.secondary_hash)(item),
        )
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn hash_rounds(&self) -> usize {
        self.hash_rounds
    }

    /// Number of accepted `insert` calls, duplicates included.
    pub fn inserted_count(&self) -> usize {
        self.inserted_count
    }

    pub fn is_full(&self) -> bool {
        self.inserted_count >= self.capacity
    }

    /// Number of bits currently set.
    pub fn set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        if self.bit_count == 0 {
            return 0.0;
        }
        self.set_bits() as f64 / self.bit_count as f64
    }

    /// Memory held by the bit array, rounded up to whole storage words.
    pub fn approx_memory_bits(&self) -> usize {
        self.bits.as_raw_slice().len() * usize::BITS as usize
    }

    pub fn bits_per_item(&self) -> f64 {
        self.approx_memory_bits() as f64 / self.capacity as f64
    }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("capacity", &self.capacity)
            .field("false_positive_rate", &self.config.false_positive_rate)
            .field("bit_count", &self.bit_count)
            .field("hash_rounds", &self.hash_rounds)
            .field("inserted_count", &self.inserted_count)
            .finish_non_exhaustive()
    }
}
