//! Ratcliff/Obershelp "gestalt" matching with a junk predicate on the second
//! sequence, the ratio behind Python's `difflib.SequenceMatcher`.

use hashbrown::{HashMap, HashSet};
use std::hash::Hash;

// Sequences at least this long get their popular elements dropped from the index
const AUTOJUNK_MIN_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    // element of b -> ascending positions in b, junk and popular elements excluded
    b2j: HashMap<T, Vec<usize>>,
    bjunk: HashSet<T>,
}

impl<'a, T: Eq + Hash + Copy> SequenceMatcher<'a, T> {
    pub fn new<F>(a: &'a [T], b: &'a [T], is_junk: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        let mut b2j: HashMap<T, Vec<usize>> = HashMap::new();
        for (i, &elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(i);
        }

        let bjunk: HashSet<T> = b2j.keys().filter(|&elt| is_junk(elt)).copied().collect();
        b2j.retain(|elt, _| !bjunk.contains(elt));

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, idxs| idxs.len() <= ntest);
        }

        Self { a, b, b2j, bjunk }
    }

    #[inline]
    fn is_bjunk(&self, elt: &T) -> bool {
        self.bjunk.contains(elt)
    }

    /// Longest matching block in a[alo..ahi] and b[blo..bhi].
    ///
    /// Among maximal blocks the one starting earliest in a wins, then the one
    /// starting earliest in b. The block found through the index is extended
    /// first with equal non-junk neighbours, then with equal junk neighbours,
    /// so junk never starts a match but may pad one.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);

        // j2len[j] = length of the longest match ending with a[i-1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(idxs) = self.b2j.get(&a[i]) {
                for &j in idxs {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        for junk_pass in [false, true] {
            while besti > alo
                && bestj > blo
                && self.is_bjunk(&b[bestj - 1]) == junk_pass
                && a[besti - 1] == b[bestj - 1]
            {
                besti -= 1;
                bestj -= 1;
                bestsize += 1;
            }
            while besti + bestsize < ahi
                && bestj + bestsize < bhi
                && self.is_bjunk(&b[bestj + bestsize]) == junk_pass
                && a[besti + bestsize] == b[bestj + bestsize]
            {
                bestsize += 1;
            }
        }

        Match {
            a: besti,
            b: bestj,
            size: bestsize,
        }
    }

    /// Non-overlapping matching blocks in increasing order, adjacent blocks
    /// merged. Unlike difflib, no zero-size sentinel is appended.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks: Vec<Match> = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            blocks.push(m);
        }
        blocks.sort_unstable_by_key(|m| (m.a, m.b));

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len());
        for m in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == m.a && last.b + last.size == m.b => {
                    last.size += m.size;
                }
                _ => merged.push(m),
            }
        }
        merged
    }

    /// 2 * matches / total length, 1.0 when both sequences are empty.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        2.0 * matches as f64 / total as f64
    }
}

/// Gestalt ratio of two strings over chars, `junk` excluded from match starts.
pub fn seq_ratio(s1: &str, s2: &str, junk: Option<char>) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    SequenceMatcher::new(&a, &b, |c| Some(*c) == junk).ratio()
}
