use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MiningError>;

#[derive(Debug, Error)]
pub enum MiningError {
    /// Every row of the dataset was all-zero (or there were no rows).
    #[error("dataset contains no non-empty transactions")]
    EmptyDataset,

    #[error("attribute list is empty")]
    NoAttributes,

    #[error("attribute {column} has an empty name")]
    EmptyAttribute { column: usize },

    #[error("dataset has {columns} columns but {attributes} attributes were given")]
    ShapeMismatch { attributes: usize, columns: usize },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: expected 0 or 1, found {value}")]
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("malformed dataset: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("item {item} is outside the attribute universe of {attributes} items")]
    UnknownItem { item: usize, attributes: usize },

    #[error("invalid {name} threshold: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// Raised when a confidence or lift denominator is zero. Every itemset
    /// handed to the metrics is frequent, so this means the bookkeeping is broken.
    #[error("internal error: itemset {itemset:?} has zero frequency")]
    ZeroFrequency { itemset: Vec<usize> },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
