use super::text_distance::TextDistance;
use crate::error::StrDistResult;
use rapidfuzz::distance::lcs_seq;

/// Length of the longest common subsequence as the similarity.
pub struct LcsSeq;

impl TextDistance for LcsSeq {
    fn name(&self) -> &'static str {
        "lcsseq"
    }

    fn maximum(&self, a: &[char], b: &[char]) -> f64 {
        a.len().max(b.len()) as f64
    }

    fn similarity(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        Ok(lcs_seq::similarity(a.iter().copied(), b.iter().copied()) as f64)
    }
}
