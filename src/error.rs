//! Unified error handling for greenreach.
//!
//! Every variant is recoverable at the caller level: the UI layer
//! substitutes a user-visible message ("no matching points", "invalid
//! location") and keeps the rest of the interface usable.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GreenreachError>;

/// Errors produced by dataset loading and proximity search.
#[derive(Debug, Error)]
pub enum GreenreachError {
    /// The active working set holds no points, so there is nothing to
    /// index or query.
    #[error("no points to index; the active working set is empty")]
    EmptyIndex,

    /// A query coordinate lies outside the valid latitude/longitude range.
    #[error(
        "invalid query coordinate: latitude {latitude}, longitude {longitude} \
         (expected latitude in [-90, 90] and longitude in [-180, 180])"
    )]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// The requested neighbor count is not a positive number.
    #[error("neighbor count must be at least 1, got {k}")]
    InvalidK { k: usize },

    /// The source file is missing, unreadable, or malformed.
    #[error("failed to load dataset {}", .path.display())]
    DatasetLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The source file parsed but lacks a required column.
    #[error("dataset {} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: String },
}

impl GreenreachError {
    /// Wrap a csv-layer failure with the dataset path it came from.
    pub fn dataset_load(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::DatasetLoad {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// A required column is absent from the dataset header.
    pub fn missing_column(path: impl AsRef<Path>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.as_ref().to_path_buf(),
            column: column.into(),
        }
    }
}

/// Extension trait converting absent values into greenreach errors.
pub trait OptionExt<T> {
    /// Convert a missing value into [`GreenreachError::EmptyIndex`].
    fn ok_or_empty_index(self) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_empty_index(self) -> Result<T> {
        self.ok_or(GreenreachError::EmptyIndex)
    }
}
