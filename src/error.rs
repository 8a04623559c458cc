use thiserror::Error;

pub type Result<T> = std::result::Result<T, BloomError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BloomError {
    #[error("Items count should be bigger than 0, got {capacity}")]
    InvalidCapacity { capacity: i64 },

    #[error(
        "False positive probability should be higher than 0 and less than 1, got {rate}"
    )]
    InvalidProbability { rate: f64 },

    #[error(
        "Items count {capacity} needs {bits} bits, above the maximum of {max_bits}"
    )]
    CapacityTooLarge {
        capacity: i64,
        bits: usize,
        max_bits: usize,
    },
}
