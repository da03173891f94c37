use super::{char_counts, text_distance::TextDistance};
use crate::error::StrDistResult;
use hashbrown::HashMap;

/// Bag distance: the larger of |A \ B| and |B \ A| over char multisets.
/// A lower bound of the Levenshtein distance.
pub struct Bag;

#[inline]
fn excess(c1: &HashMap<char, usize>, c2: &HashMap<char, usize>) -> usize {
    c1.iter()
        .map(|(c, &n)| n.saturating_sub(c2.get(c).copied().unwrap_or(0)))
        .sum()
}

impl TextDistance for Bag {
    fn name(&self) -> &'static str {
        "bag"
    }

    fn maximum(&self, a: &[char], b: &[char]) -> f64 {
        a.len().max(b.len()) as f64
    }

    fn distance(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        let c1 = char_counts(a);
        let c2 = char_counts(b);
        Ok(excess(&c1, &c2).max(excess(&c2, &c1)) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::str_ext::levenshtein::levenshtein;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_bag() {
        assert_eq!(Bag.distance(&chars("abc"), &chars("abd")).unwrap(), 1.0);
        assert_eq!(Bag.distance(&chars("abc"), &chars("cba")).unwrap(), 0.0);
        assert_eq!(Bag.distance(&chars(""), &chars("abc")).unwrap(), 3.0);
        assert_eq!(
            Bag.distance(&chars("Saeid SOHEILY KHAH"), &chars("SOHEILY")).unwrap(),
            11.0
        );
    }

    #[test]
    fn test_lower_bounds_levenshtein() {
        for (s1, s2) in [("kitten", "sitting"), ("flaw", "lawn"), ("abcdef", "fedcba")] {
            let (a, b) = (chars(s1), chars(s2));
            assert!(Bag.distance(&a, &b).unwrap() <= levenshtein(&a, &b) as f64);
        }
    }
}
