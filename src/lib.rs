mod error;
pub mod report;
pub mod str_ext;
mod utils;

pub use error::{BitHammingError, StrDistError, StrDistResult};
pub use report::{Report, ReportOptions};
pub use str_ext::{
    bit_hamming::{bit_hamming, char_to_bits},
    fuzz::simple_ratio,
    histogram::{char_histogram, histogram_distance},
    levenshtein::{levenshtein, normalized_levenshtein, str_levenshtein},
    seq_matcher::{seq_ratio, SequenceMatcher},
    text_distance::{
        evaluate, evaluate_by_name, evaluate_strategy, Algorithm, Method, Outcome, TextDistance,
    },
};
