//! Simple fuzzy ratio: the normalized Indel similarity times 100, rounded to
//! the nearest integer.

use rapidfuzz::fuzz::ratio;

/// Returns the simple fuzzy ratio between two strings on a 0..=100 scale.
#[inline]
pub fn simple_ratio(s1: &str, s2: &str) -> u32 {
    (ratio(s1.chars(), s2.chars()) * 100.0).round() as u32
}
