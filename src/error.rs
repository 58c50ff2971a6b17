//! Error types for nutricare operations.
//!
//! Every failure in encoding, artifact loading, and classification is
//! surfaced as a [`NutricareError`]. Nothing is logged and swallowed inside
//! the library; callers decide how to present errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for nutricare operations.
///
/// # Examples
///
/// ```
/// use nutricare::error::NutricareError;
///
/// let err = NutricareError::unknown_category("Stres", "Kadang");
/// assert!(err.to_string().contains("Stres"));
/// ```
#[derive(Debug, Error)]
pub enum NutricareError {
    /// A categorical answer is outside its declared label set.
    #[error("unknown category for {field}: {value:?}")]
    UnknownCategory {
        /// Questionnaire field name (column name)
        field: String,
        /// Offending value, after whitespace trimming
        value: String,
    },

    /// Artifact feature schema disagrees with the encoder schema.
    #[error("schema mismatch: expected {expected}, got {actual}")]
    SchemaMismatch {
        /// Expected schema description
        expected: String,
        /// Schema found in the artifact
        actual: String,
    },

    /// Vector and representative point dimensionality differ.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// No representative groups are loaded.
    #[error("representative set contains no cluster groups")]
    EmptyClusterSet,

    /// A representative group holds no points.
    #[error("cluster group {cluster} contains no representative points")]
    EmptyCluster {
        /// Index of the empty group
        cluster: usize,
    },

    /// Scaler or representative file is missing or corrupt.
    #[error("failed to load artifact {path}: {reason}")]
    ArtifactLoad {
        /// Artifact path
        path: PathBuf,
        /// Failure description
        reason: String,
    },

    /// Artifact declares a schema version this build cannot encode for.
    #[error("unsupported schema version {found}, supported: {supported}")]
    UnsupportedSchemaVersion {
        /// Version declared by the artifact
        found: u32,
        /// Version understood by the encoder
        supported: u32,
    },

    /// A numeric feature is NaN or infinite.
    #[error("non-finite value in feature {field}")]
    NonFiniteFeature {
        /// Feature name
        field: String,
    },

    /// A record failed validation before encoding.
    #[error("invalid record field {field}: {reason}")]
    InvalidRecord {
        /// Questionnaire field name
        field: String,
        /// Constraint that was violated
        reason: String,
    },

    /// I/O error while reading input or artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NutricareError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a schema mismatch error with descriptive context
    #[must_use]
    pub fn schema_mismatch(
        context: &str,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::SchemaMismatch {
            expected: format!("{context}={expected}"),
            actual: actual.to_string(),
        }
    }

    /// Create an unknown category error
    #[must_use]
    pub fn unknown_category(field: &str, value: &str) -> Self {
        Self::UnknownCategory {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an artifact load error
    #[must_use]
    pub fn artifact_load(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::ArtifactLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid record error
    #[must_use]
    pub fn invalid_record(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, NutricareError>;
