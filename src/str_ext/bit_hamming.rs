use crate::error::BitHammingError;

#[inline]
fn single_byte(ch: char, position: usize) -> Result<u8, BitHammingError> {
    let mut buf = [0u8; 4];
    match ch.encode_utf8(&mut buf).as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(BitHammingError::MultiByteChar { ch, position }),
    }
}

/// 8-bit representation of a character, most significant bit first.
/// 'a' becomes "01100001".
pub fn char_to_bits(ch: char) -> Result<String, BitHammingError> {
    single_byte(ch, 0).map(|byte| format!("{:08b}", byte))
}

/// Number of differing bits between two equal-length strings, each char
/// expanded to its 8-bit code.
pub fn bit_hamming(s1: &str, s2: &str) -> Result<u32, BitHammingError> {
    let (left, right) = (s1.chars().count(), s2.chars().count());
    if left != right {
        return Err(BitHammingError::UnequalLength { left, right });
    }

    s1.chars()
        .zip(s2.chars())
        .enumerate()
        .try_fold(0u32, |acc, (position, (c1, c2))| {
            let x = single_byte(c1, position)?;
            let y = single_byte(c2, position)?;
            Ok(acc + (x ^ y).count_ones())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_bits() {
        assert_eq!(char_to_bits('a').unwrap(), "01100001");
        assert_eq!(char_to_bits(' ').unwrap(), "00100000");
        assert_eq!(char_to_bits('\0').unwrap(), "00000000");
        assert!(matches!(
            char_to_bits('é'),
            Err(BitHammingError::MultiByteChar { ch: 'é', .. })
        ));
    }

    #[test]
    fn test_bit_hamming() {
        assert_eq!(bit_hamming("", ""), Ok(0));
        assert_eq!(bit_hamming("abc", "abc"), Ok(0));
        // 'c' = 0110_0011, 'd' = 0110_0100
        assert_eq!(bit_hamming("abc", "abd"), Ok(3));
        assert_eq!(bit_hamming("a", "A"), Ok(1));
    }

    #[test]
    fn test_bit_hamming_agrees_with_bit_strings() {
        let (s1, s2) = ("Saeid", "SOHEI");
        let expected: usize = s1
            .chars()
            .zip(s2.chars())
            .map(|(c1, c2)| {
                let (b1, b2) = (char_to_bits(c1).unwrap(), char_to_bits(c2).unwrap());
                b1.chars().zip(b2.chars()).filter(|(x, y)| x != y).count()
            })
            .sum();
        assert_eq!(bit_hamming(s1, s2), Ok(expected as u32));
    }

    #[test]
    fn test_undefined_cases() {
        let err = bit_hamming("Saeid SOHEILY KHAH", "SOHEILY").unwrap_err();
        assert_eq!(err, BitHammingError::UnequalLength { left: 18, right: 7 });
        assert_eq!(err.to_string(), "Undefined for sequences of unequal length");

        assert_eq!(
            bit_hamming("ab€", "abc"),
            Err(BitHammingError::MultiByteChar { ch: '€', position: 2 })
        );
    }
}
