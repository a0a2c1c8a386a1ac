pub mod astro;
pub mod config;

use std::hash::Hasher;

/// Hash a string using xxHash64 for use as cache keys
pub fn hash_string(s: &str) -> i64 {
    let mut hasher = twox_hash::XxHash64::default();
    hasher.write(s.to_lowercase().as_bytes());
    hasher.finish() as i64
}

/// Collapse runs of whitespace into single spaces.
pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
