use crate::utils::to_chars;

/// Levenshtein distance between two sequences.
///
/// The shorter input sizes the two rolling rows, so memory is O(min(n, m))
/// while time stays O(n * m). `previous` holds the row for the prefix of the
/// longer input ending one element earlier, `current` the row being filled.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // n <= m from here on
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };
    let (n, m) = (a.len(), b.len());

    let mut previous: Vec<usize> = Vec::with_capacity(n + 1);
    let mut current: Vec<usize> = (0..=n).collect();

    for i in 1..=m {
        std::mem::swap(&mut previous, &mut current);
        current.clear();
        current.push(i);
        current.resize(n + 1, 0);
        for j in 1..=n {
            let add = previous[j] + 1;
            let delete = current[j - 1] + 1;
            let change = previous[j - 1] + (a[j - 1] != b[i - 1]) as usize;
            current[j] = add.min(delete).min(change);
        }
    }
    current[n]
}

#[inline]
pub fn str_levenshtein(s1: &str, s2: &str) -> usize {
    levenshtein(&to_chars(s1), &to_chars(s2))
}

/// Levenshtein distance divided by the combined char length.
/// Two empty strings have nothing to divide by and get the raw distance, 0.
pub fn normalized_levenshtein(s1: &str, s2: &str) -> f64 {
    let a = to_chars(s1);
    let b = to_chars(s2);
    let dist = levenshtein(&a, &b);
    match a.len() + b.len() {
        0 => dist as f64,
        total => dist as f64 / total as f64,
    }
}
