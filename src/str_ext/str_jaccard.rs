use super::{char_counts, text_distance::TextDistance};
use crate::error::StrDistResult;

/// Jaccard index over char multisets: |A ∩ B| / |A ∪ B| where the
/// intersection takes the smaller count of every char and the union the larger.
pub struct Jaccard;

impl TextDistance for Jaccard {
    fn name(&self) -> &'static str {
        "jaccard"
    }

    fn maximum(&self, _a: &[char], _b: &[char]) -> f64 {
        1.0
    }

    fn similarity(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        if a == b {
            return Ok(1.0);
        }
        if a.is_empty() || b.is_empty() {
            return Ok(0.0);
        }

        let c1 = char_counts(a);
        let c2 = char_counts(b);
        let intersection: usize = c1
            .iter()
            .filter_map(|(c, &n1)| c2.get(c).map(|&n2| n1.min(n2)))
            .sum();
        let union = a.len() + b.len() - intersection;
        Ok(intersection as f64 / union as f64)
    }
}
