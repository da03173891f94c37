// -------------------------------------------------------------------------------
// Common, Resuable Functions
// -------------------------------------------------------------------------------

/// Rounds to the given number of decimals, deciding on the exact binary value
/// of `x` rather than on `x * 10^digits`, so 0.0215 (stored as 0.02149999..)
/// rounds down.
#[inline(always)]
pub fn round_to(x: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, x).parse().unwrap_or(x)
}

// Use chars to avoid mistakes for multi-byte characters
#[inline(always)]
pub fn to_chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.4444444, 3), 0.444);
        assert_eq!(round_to(0.56, 3), 0.56);
        assert_eq!(round_to(2.0 / 3.0, 6), 0.666667);
        assert_eq!(round_to(11.0, 6), 11.0);
    }

    #[test]
    fn test_round_to_uses_stored_value() {
        assert_eq!(round_to(0.0215, 3), 0.021);
        assert_eq!(round_to(0.5565, 3), 0.556);
        assert_eq!(round_to(0.8825, 3), 0.882);
        assert_eq!(round_to(-0.0215, 3), -0.021);
    }
}
