use crate::error::{StrDistError, StrDistResult};
use itertools::{EitherOrBoth, Itertools};
use ndarray::Array1;

pub const DEFAULT_BINS: usize = 10;

/// Density-normalized histogram of the code points of `s`.
///
/// Buckets are `bins` equal-width intervals over [min, max] of the code
/// points, widened by 0.5 on each side when all code points are equal. Every
/// bucket is half-open except the last, which includes max. Each count is
/// divided by `len * bucket_width`, so the histogram integrates to 1.
/// The empty string gives an all-zero histogram.
pub fn char_histogram(s: &str, bins: usize) -> StrDistResult<Array1<f64>> {
    if bins == 0 {
        return Err(StrDistError::InvalidBins);
    }

    let codes: Vec<f64> = s.chars().map(|c| c as u32 as f64).collect();
    let mut density = Array1::<f64>::zeros(bins);
    if codes.is_empty() {
        return Ok(density);
    }

    let (mut lo, mut hi) = codes
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let edges = Array1::linspace(lo, hi, bins + 1);
    let norm = bins as f64 / (hi - lo);
    for &x in &codes {
        let mut idx = (((x - lo) * norm) as usize).min(bins - 1);
        // The scaled index can be off by one next to an edge
        if idx > 0 && x < edges[idx] {
            idx -= 1;
        } else if idx + 1 < bins && x >= edges[idx + 1] {
            idx += 1;
        }
        density[idx] += 1.0;
    }

    let total = codes.len() as f64;
    for (i, d) in density.iter_mut().enumerate() {
        *d /= total * (edges[i + 1] - edges[i]);
    }
    Ok(density)
}

/// Sum of absolute bucket-wise differences between the two histograms.
pub fn histogram_distance(s1: &str, s2: &str, bins: usize) -> StrDistResult<f64> {
    let h1 = char_histogram(s1, bins)?;
    let h2 = char_histogram(s2, bins)?;
    Ok(h1
        .iter()
        .zip_longest(h2.iter())
        .map(|pair| match pair {
            EitherOrBoth::Both(x, y) => (x - y).abs(),
            EitherOrBoth::Left(x) | EitherOrBoth::Right(x) => x.abs(),
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn integral(s: &str, bins: usize) -> f64 {
        let codes: Vec<f64> = s.chars().map(|c| c as u32 as f64).collect();
        let lo = codes.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = codes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let width = (if lo == hi { 1.0 } else { hi - lo }) / bins as f64;
        char_histogram(s, bins).unwrap().sum() * width
    }

    #[test]
    fn test_constant_string() {
        let h = char_histogram("aaaa", DEFAULT_BINS).unwrap();
        for (i, &d) in h.iter().enumerate() {
            if i == 5 {
                assert_abs_diff_eq!(d, 10.0, epsilon = 1e-9);
            } else {
                assert_eq!(d, 0.0);
            }
        }
    }

    #[test]
    fn test_edges() {
        // codes 0..=10 over 10 buckets, the max lands in the last bucket
        let s: String = (0u8..=10).map(char::from).collect();
        let h = char_histogram(&s, 10).unwrap();
        let counts: Vec<f64> = h.iter().map(|d| d * 11.0).collect();
        for c in &counts[..9] {
            assert_abs_diff_eq!(*c, 1.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(counts[9], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_integrates_to_one() {
        for s in ["Saeid SOHEILY KHAH", "SOHEILY", "x", "hello world"] {
            assert_abs_diff_eq!(integral(s, DEFAULT_BINS), 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(integral(s, 3), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_empty_and_invalid() {
        let h = char_histogram("", DEFAULT_BINS).unwrap();
        assert_eq!(h.len(), DEFAULT_BINS);
        assert!(h.iter().all(|&d| d == 0.0));
        assert!(matches!(char_histogram("abc", 0), Err(StrDistError::InvalidBins)));
    }

    #[test]
    fn test_distance() {
        assert_eq!(histogram_distance("abc", "abc", DEFAULT_BINS).unwrap(), 0.0);
        // "aaaa" and "bbbb" both collapse into the middle bucket
        assert_eq!(histogram_distance("aaaa", "bbbb", DEFAULT_BINS).unwrap(), 0.0);
        let d = histogram_distance("Saeid SOHEILY KHAH", "SOHEILY", DEFAULT_BINS).unwrap();
        assert!(d.is_finite() && d > 0.0);
        assert_abs_diff_eq!(
            histogram_distance("ab", "ba", DEFAULT_BINS).unwrap(),
            0.0,
            epsilon = 1e-12
        );
    }
}
