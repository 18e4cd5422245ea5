//! Errors raised while reading samples or growing a tree.
use std::path::PathBuf;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while training a tree
/// or while reading training samples from a file.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Training was requested on zero samples.
    #[error("Cannot grow a decision tree from an empty sample")]
    EmptySample,
    /// A training sample carries a NaN or infinite amount.
    #[error("Sample #{index} has a non-finite amount ({amount})")]
    NonFiniteAmount {
        /// Position of the offending sample in the input.
        index: usize,
        /// The offending amount.
        amount: f64,
    },
    /// Failed to open or read a sample file.
    #[error("Failed to read sample file {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A CSV row could not be parsed.
    #[error("Malformed row in {path} at line {line}: {message}")]
    Parse {
        /// The file being read.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What is wrong with the row.
        message: String,
    },
    /// A JSON sample file could not be decoded.
    #[error("Failed to decode JSON samples in {path}: {source}")]
    Json {
        /// The file being read.
        path: PathBuf,
        /// The underlying decoding error.
        source: serde_json::Error,
    },
    /// The sample file holds no rows.
    #[error("Sample file {path} contains no transactions")]
    EmptyFile {
        /// The empty file.
        path: PathBuf,
    },
}
