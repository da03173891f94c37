pub mod bag;
pub mod bit_hamming;
pub mod editex;
pub mod fuzz;
pub mod hamming;
pub mod histogram;
pub mod jaro;
pub mod lcs_seq;
pub mod levenshtein;
pub mod matrix;
pub mod prefix;
pub mod seq_matcher;
pub mod str_jaccard;
pub mod text_distance;

// The Levenshtein core only needs std. rapidfuzz backs the hamming, jaro,
// lcsseq and prefix strategies and the fuzzy ratio.

// Hashbrown has better perf than Rust's HashMap
use hashbrown::HashMap;

/// Char multiset as a count per distinct char.
#[inline]
pub fn char_counts(s: &[char]) -> HashMap<char, usize> {
    let mut counts: HashMap<char, usize> = HashMap::with_capacity(s.len());
    for &c in s {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
