//! The battery of named text distance strategies. Every strategy speaks the
//! same three methods, and a strategy is picked by name from a static table.

use super::{bag, editex, hamming, jaro, lcs_seq, matrix, prefix, str_jaccard};
use crate::error::{StrDistError, StrDistResult};
use crate::utils::to_chars;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Shared capability of every strategy in the battery.
///
/// Distance and similarity are tied together by `maximum`:
/// `similarity = maximum - distance`. An implementation overrides at least
/// one of `distance` and `similarity`; the provided methods derive the rest.
pub trait TextDistance: Sync {
    fn name(&self) -> &'static str;

    /// Upper bound of both distance and similarity for these inputs.
    fn maximum(&self, a: &[char], b: &[char]) -> f64;

    fn distance(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        Ok(self.maximum(a, b) - self.similarity(a, b)?)
    }

    fn similarity(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        Ok(self.maximum(a, b) - self.distance(a, b)?)
    }

    fn normalized_distance(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        let maximum = self.maximum(a, b);
        if maximum == 0.0 {
            return Ok(0.0);
        }
        Ok(self.distance(a, b)? / maximum)
    }

    fn normalized_similarity(&self, a: &[char], b: &[char]) -> StrDistResult<f64> {
        Ok(1.0 - self.normalized_distance(a, b)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Hamming,
    Jaro,
    Jaccard,
    Bag,
    LcsSeq,
    Editex,
    Prefix,
    Matrix,
}

// Indexed by `Algorithm as usize`
static STRATEGIES: [&dyn TextDistance; 8] = [
    &hamming::Hamming,
    &jaro::Jaro,
    &str_jaccard::Jaccard,
    &bag::Bag,
    &lcs_seq::LcsSeq,
    &editex::Editex,
    &prefix::Prefix,
    &matrix::Matrix,
];

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Hamming,
        Algorithm::Jaro,
        Algorithm::Jaccard,
        Algorithm::Bag,
        Algorithm::LcsSeq,
        Algorithm::Editex,
        Algorithm::Prefix,
        Algorithm::Matrix,
    ];

    #[inline]
    pub fn strategy(self) -> &'static dyn TextDistance {
        STRATEGIES[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.strategy().name()
    }
}

impl FromStr for Algorithm {
    type Err = StrDistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| StrDistError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Distance,
    Similarity,
    NormalizedSimilarity,
}

impl Method {
    pub const ALL: [Method; 3] = [
        Method::Distance,
        Method::Similarity,
        Method::NormalizedSimilarity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Distance => "distance",
            Method::Similarity => "similarity",
            Method::NormalizedSimilarity => "normalized_similarity",
        }
    }
}

impl FromStr for Method {
    type Err = StrDistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| StrDistError::UnknownMethod(s.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one algorithm/method evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Value(f64),
    /// The algorithm or method name is not in the table.
    Unsupported { name: String },
    /// The strategy ran and reported an error.
    Failed { reason: String },
}

impl Outcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(*v),
            _ => None,
        }
    }
}

pub fn evaluate(algorithm: Algorithm, method: Method, s1: &str, s2: &str) -> Outcome {
    evaluate_strategy(algorithm.strategy(), method, s1, s2)
}

/// Runs one method of any strategy. Errors and non-finite values come back as
/// `Outcome::Failed` and are logged.
pub fn evaluate_strategy(
    strategy: &dyn TextDistance,
    method: Method,
    s1: &str,
    s2: &str,
) -> Outcome {
    let (a, b) = (to_chars(s1), to_chars(s2));
    let result = match method {
        Method::Distance => strategy.distance(&a, &b),
        Method::Similarity => strategy.similarity(&a, &b),
        Method::NormalizedSimilarity => strategy.normalized_similarity(&a, &b),
    }
    .and_then(|v| {
        if v.is_finite() {
            Ok(v)
        } else {
            Err(StrDistError::Computation {
                algorithm: strategy.name(),
                reason: format!("{method} is not finite: {v}"),
            })
        }
    });
    match result {
        Ok(v) => Outcome::Value(v),
        Err(e) => {
            tracing::warn!(
                algorithm = strategy.name(),
                %method,
                error = %e,
                "text distance failed"
            );
            Outcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

/// Looks both names up before evaluating; an unknown name is `Unsupported`.
pub fn evaluate_by_name(algorithm: &str, method: &str, s1: &str, s2: &str) -> Outcome {
    match (algorithm.parse::<Algorithm>(), method.parse::<Method>()) {
        (Ok(algorithm), Ok(method)) => evaluate(algorithm, method, s1, s2),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(error = %e, "skipping unsupported text distance");
            Outcome::Unsupported {
                name: format!("{algorithm}.{method}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const LEFT: &str = "Saeid SOHEILY KHAH";
    const RIGHT: &str = "SOHEILY";

    #[test]
    fn test_lookup_table() {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            ["hamming", "jaro", "jaccard", "bag", "lcsseq", "editex", "prefix", "matrix"]
        );
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
        }
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>().unwrap(), method);
        }
        assert!(matches!(
            "soundex".parse::<Algorithm>(),
            Err(StrDistError::UnknownAlgorithm(_))
        ));
        assert!(matches!(
            "maximum".parse::<Method>(),
            Err(StrDistError::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_unsupported_by_name() {
        assert_eq!(
            evaluate_by_name("soundex", "distance", "a", "b"),
            Outcome::Unsupported {
                name: "soundex.distance".to_string()
            }
        );
        assert_eq!(
            evaluate_by_name("jaro", "normalized_distance", "a", "b"),
            Outcome::Unsupported {
                name: "jaro.normalized_distance".to_string()
            }
        );
        assert_eq!(
            evaluate_by_name("matrix", "similarity", "a", "a"),
            Outcome::Value(1.0)
        );
    }

    #[test]
    fn test_battery_on_example_pair() {
        for algo in Algorithm::ALL {
            let strategy = algo.strategy();
            let (a, b) = (to_chars(LEFT), to_chars(RIGHT));
            let maximum = strategy.maximum(&a, &b);
            let dist = evaluate(algo, Method::Distance, LEFT, RIGHT).value().unwrap();
            let sim = evaluate(algo, Method::Similarity, LEFT, RIGHT).value().unwrap();
            let norm = evaluate(algo, Method::NormalizedSimilarity, LEFT, RIGHT)
                .value()
                .unwrap();
            assert_abs_diff_eq!(dist + sim, maximum, epsilon = 1e-9);
            assert!((0.0..=1.0).contains(&norm), "{algo}: {norm}");
        }
    }

    #[test]
    fn test_identical_inputs() {
        for algo in Algorithm::ALL {
            let d = evaluate(algo, Method::Distance, "abc", "abc").value().unwrap();
            assert_abs_diff_eq!(d, 0.0, epsilon = 1e-12);
            let n = evaluate(algo, Method::NormalizedSimilarity, "abc", "abc")
                .value()
                .unwrap();
            assert_abs_diff_eq!(n, 1.0, epsilon = 1e-12);
        }
    }

    struct Broken;

    impl TextDistance for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn maximum(&self, _a: &[char], _b: &[char]) -> f64 {
            0.0
        }

        fn distance(&self, _a: &[char], _b: &[char]) -> StrDistResult<f64> {
            Ok(f64::NAN)
        }
    }

    #[test]
    fn test_non_finite_value_fails() {
        assert_eq!(
            evaluate_strategy(&Broken, Method::Distance, "a", "b"),
            Outcome::Failed {
                reason: "broken failed: distance is not finite: NaN".to_string()
            }
        );
        // 0 - NaN
        assert!(matches!(
            evaluate_strategy(&Broken, Method::Similarity, "a", "b"),
            Outcome::Failed { .. }
        ));
        // maximum 0 short-circuits the division
        assert_eq!(
            evaluate_strategy(&Broken, Method::NormalizedSimilarity, "a", "b"),
            Outcome::Value(1.0)
        );
    }
}
