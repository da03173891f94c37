use super::text_distance::TextDistance;
use crate::error::StrDistResult;
use rapidfuzz::distance::hamming;

/// Char-wise Hamming distance, the shorter input padded so that every extra
/// char of the longer input counts as a mismatch.
pub struct Hamming;

impl TextDistance for Hamming {
    fn name(&self) -> &'static str {
        "hamming"
    }

    fn maximum(&self, a: &[char], b: &[char]) -> f64 {
        a.len().max(b.len()) as f64
    }

    fn distance(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        Ok(hamming::distance_with_args(
            a.iter().copied(),
            b.iter().copied(),
            &hamming::Args::default().pad(true),
        ) as f64)
    }
}
