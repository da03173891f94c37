use super::text_distance::TextDistance;
use crate::error::StrDistResult;
use rapidfuzz::distance::prefix;

/// Length of the common prefix as the similarity.
pub struct Prefix;

impl TextDistance for Prefix {
    fn name(&self) -> &'static str {
        "prefix"
    }

    fn maximum(&self, a: &[char], b: &[char]) -> f64 {
        a.len().max(b.len()) as f64
    }

    fn similarity(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        Ok(prefix::similarity(a.iter().copied(), b.iter().copied()) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_prefix() {
        assert_eq!(Prefix.similarity(&chars("abc"), &chars("abd")).unwrap(), 2.0);
        assert_eq!(Prefix.distance(&chars("abc"), &chars("abd")).unwrap(), 1.0);
        assert_eq!(Prefix.similarity(&chars("Saeid"), &chars("SOHEILY")).unwrap(), 1.0);
        assert_eq!(Prefix.normalized_similarity(&[], &[]).unwrap(), 1.0);
    }
}
