use super::text_distance::TextDistance;
use crate::error::StrDistResult;
use rapidfuzz::distance::jaro;

pub struct Jaro;

impl TextDistance for Jaro {
    fn name(&self) -> &'static str {
        "jaro"
    }

    fn maximum(&self, _a: &[char], _b: &[char]) -> f64 {
        1.0
    }

    fn similarity(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        Ok(jaro::similarity(a.iter().copied(), b.iter().copied()))
    }
}
