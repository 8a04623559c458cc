use rand::{Rng, distr::Alphanumeric};

/// Random alphanumeric string of the given length
pub fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Deterministic items sharing a prefix, so sets with different prefixes
/// never overlap
pub fn generate_test_items(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}_{i:06}")).collect()
}

/// Random items sharing a prefix
pub fn generate_random_items(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| format!("{prefix}_{}", generate_random_string(24)))
        .collect()
}
