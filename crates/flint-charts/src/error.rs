// File: crates/flint-charts/src/error.rs
// Summary: Error taxonomy for chart construction and rendering.

use thiserror::Error;

/// Failures surfaced by the chart pipeline. Everything is synchronous and
/// raised to the immediate caller; there is no retry or fallback rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested chart kind is not one of the supported set.
    #[error("unsupported chart type '{0}'")]
    UnsupportedKind(String),

    /// An option name outside the recognized set was given at the string
    /// boundary. Unknown names fail hard rather than being dropped.
    #[error("unknown chart option '{0}'")]
    UnknownOption(String),

    /// A recognized option carried a value that does not parse.
    #[error("invalid value '{value}' for chart option '{option}'")]
    InvalidOption { option: String, value: String },

    /// The dataset has no rows or no columns.
    #[error("dataset is empty")]
    EmptyData,

    /// A column is not aligned with the index.
    #[error("column '{name}' has {got} values but the index has {want}")]
    LengthMismatch { name: String, got: usize, want: usize },

    /// Numeric index values must be finite and strictly increasing.
    #[error("index values must be finite and strictly increasing")]
    BadIndex,

    /// The chart kind plots against the index and needs numbers there.
    #[error("chart kind '{kind}' requires a numeric index")]
    NonNumericIndex { kind: String },

    /// The output format (or path extension) is not supported.
    #[error("unsupported image format '{0}'")]
    UnsupportedFormat(String),

    /// Wrapped failure from the drawing backend.
    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
