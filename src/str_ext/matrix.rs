use super::text_distance::TextDistance;
use crate::error::StrDistResult;

const MATCH_COST: f64 = 1.0;
const MISMATCH_COST: f64 = 0.0;

/// Substitution-matrix similarity with an empty matrix: whole inputs either
/// match or they don't.
pub struct Matrix;

impl TextDistance for Matrix {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn maximum(&self, _a: &[char], _b: &[char]) -> f64 {
        MATCH_COST
    }

    fn similarity(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        Ok(if a == b { MATCH_COST } else { MISMATCH_COST })
    }
}
