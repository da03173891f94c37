//! The demonstration report: one line per metric for a pair of strings, in a
//! fixed order.

use crate::{
    str_ext::{
        bit_hamming::bit_hamming,
        fuzz::simple_ratio,
        histogram::{histogram_distance, DEFAULT_BINS},
        levenshtein::normalized_levenshtein,
        seq_matcher::seq_ratio,
        text_distance::{evaluate_by_name, Algorithm, Method, Outcome},
    },
    utils::round_to,
};
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LEFT: &str = "Saeid SOHEILY KHAH";
pub const DEFAULT_RIGHT: &str = "SOHEILY";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReportOptions {
    /// Bucket count of the code point histograms.
    pub bins: usize,
    /// Element ignored when starting a sequence-ratio match.
    pub junk: Option<char>,
    /// Decimals kept for the sequence ratio and the normalized edit distance.
    pub ratio_digits: usize,
    /// Decimals kept for the histogram distance and the battery.
    pub value_digits: usize,
    pub algorithms: Vec<String>,
    pub methods: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            junk: Some(' '),
            ratio_digits: 3,
            value_digits: 6,
            algorithms: Algorithm::ALL.iter().map(|a| a.name().to_string()).collect(),
            methods: Method::ALL.iter().map(|m| m.name().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Printed with six decimals.
    Fixed(f64),
    Score(f64),
    Percent(u32),
    Undefined(String),
    Missing,
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Fixed(v) => write!(f, "{:.6}", v),
            MetricValue::Score(v) => write!(f, "{}", v),
            MetricValue::Percent(p) => write!(f, "{}%", p),
            MetricValue::Undefined(msg) => f.write_str(msg),
            MetricValue::Missing => f.write_str("None"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub label: String,
    pub value: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub left: String,
    pub right: String,
    pub lines: Vec<ReportLine>,
}

impl Report {
    /// Every metric gets a line; a metric that cannot be computed is shown as
    /// `Undefined` or `None` rather than failing the report.
    pub fn build(left: &str, right: &str, options: &ReportOptions) -> Report {
        let mut lines: Vec<ReportLine> = Vec::with_capacity(
            5 + options.algorithms.len() * options.methods.len(),
        );
        let mut push = |label: String, value: MetricValue| {
            tracing::debug!(%label, %value, "metric");
            lines.push(ReportLine { label, value });
        };

        let ratio = round_to(seq_ratio(left, right, options.junk), options.ratio_digits);
        push("SequenceMatcher distance".into(), MetricValue::Fixed(ratio));

        let lev = normalized_levenshtein(left, right);
        push(
            "Levenshtein distance".into(),
            MetricValue::Fixed(round_to(lev, options.ratio_digits)),
        );

        let hamming = match bit_hamming(left, right) {
            Ok(d) => MetricValue::Score(d as f64),
            Err(e) => MetricValue::Undefined(e.to_string()),
        };
        push("Hamming edit-based distance".into(), hamming);

        let hist = match histogram_distance(left, right, options.bins) {
            Ok(d) => MetricValue::Score(round_to(d, options.value_digits)),
            Err(e) => {
                tracing::warn!(bins = options.bins, error = %e, "histogram distance failed");
                MetricValue::Undefined(e.to_string())
            }
        };
        push("Histogram-based distance".into(), hist);

        for (algo, method) in iproduct!(&options.algorithms, &options.methods) {
            let value = match evaluate_by_name(algo, method, left, right) {
                Outcome::Value(v) => MetricValue::Score(round_to(v, options.value_digits)),
                Outcome::Unsupported { .. } | Outcome::Failed { .. } => MetricValue::Missing,
            };
            push(format!("{algo} {method}"), value);
        }

        push(
            "Simple ratio fuzzy distance".into(),
            MetricValue::Percent(simple_ratio(left, right)),
        );

        Report {
            left: left.to_string(),
            right: right.to_string(),
            lines,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} between '{}' and '{}' is: {}",
                line.label, self.left, self.right, line.value
            )?;
        }
        Ok(())
    }
}
