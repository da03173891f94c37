//! Editex (Zobel & Dart): an edit distance where replacing a letter by one
//! from the same phonetic group is cheaper than an arbitrary replacement.

use super::text_distance::TextDistance;
use crate::error::StrDistResult;
use ndarray::Array2;

const MATCH_COST: usize = 0;
const GROUP_COST: usize = 1;
const MISMATCH_COST: usize = 2;

const GROUPS: [&str; 10] = [
    "AEIOUY", "BP", "CKQ", "DT", "LR", "MN", "GJ", "FPV", "SXZ", "CSZ",
];
// Silent letters: deleting one after a different letter costs a group edit
const UNGROUPED: &str = "HW";

pub struct Editex;

#[inline]
fn is_letter(c: char) -> bool {
    UNGROUPED.contains(c) || GROUPS.iter().any(|g| g.contains(c))
}

#[inline]
fn r_cost(c1: char, c2: char) -> usize {
    if c1 == c2 {
        return MATCH_COST;
    }
    if !is_letter(c1) || !is_letter(c2) {
        return MISMATCH_COST;
    }
    if GROUPS.iter().any(|g| g.contains(c1) && g.contains(c2)) {
        GROUP_COST
    } else {
        MISMATCH_COST
    }
}

#[inline]
fn d_cost(prev: char, curr: char) -> usize {
    if prev != curr && UNGROUPED.contains(prev) {
        return GROUP_COST;
    }
    r_cost(prev, curr)
}

impl Editex {
    fn editex(&self, a: &[char], b: &[char]) -> usize {
        // Uppercase first, a lowercase glyph may map to more than one char
        let s1: Vec<char> = std::iter::once(' ')
            .chain(a.iter().flat_map(|c| c.to_uppercase()))
            .collect();
        let s2: Vec<char> = std::iter::once(' ')
            .chain(b.iter().flat_map(|c| c.to_uppercase()))
            .collect();
        let (l1, l2) = (s1.len() - 1, s2.len() - 1);

        let mut d = Array2::<usize>::zeros((l1 + 1, l2 + 1));
        for i in 1..=l1 {
            d[[i, 0]] = d[[i - 1, 0]] + d_cost(s1[i - 1], s1[i]);
        }
        for j in 1..=l2 {
            d[[0, j]] = d[[0, j - 1]] + d_cost(s2[j - 1], s2[j]);
        }
        for i in 1..=l1 {
            for j in 1..=l2 {
                d[[i, j]] = (d[[i - 1, j]] + d_cost(s1[i - 1], s1[i]))
                    .min(d[[i, j - 1]] + d_cost(s2[j - 1], s2[j]))
                    .min(d[[i - 1, j - 1]] + r_cost(s1[i], s2[j]));
            }
        }
        d[[l1, l2]]
    }
}

impl TextDistance for Editex {
    fn name(&self) -> &'static str {
        "editex"
    }

    fn maximum(&self, a: &[char], b: &[char]) -> f64 {
        (a.len().max(b.len()) * MISMATCH_COST) as f64
    }

    fn distance(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        if a == b {
            return Ok(0.0);
        }
        if a.is_empty() || b.is_empty() {
            return Ok(self.maximum(a, b));
        }
        Ok(self.editex(a, b) as f64)
    }
}
