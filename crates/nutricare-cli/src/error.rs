//! Error types for the nutricare CLI.

use nutricare::error::NutricareError;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Artifact file missing or unreadable
    #[error("Artifact load failed: {0}")]
    ArtifactLoad(String),

    /// Artifacts disagree with the feature schema or with each other
    #[error("Schema error: {0}")]
    Schema(String),

    /// Questionnaire input rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation checks failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other library error
    #[error("Nutricare error: {0}")]
    Nutricare(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Nutricare(_) => ExitCode::from(1),
            Self::ArtifactLoad(_) => ExitCode::from(3),
            Self::Schema(_) => ExitCode::from(4),
            Self::InvalidInput(_) => ExitCode::from(5),
            Self::ValidationFailed(_) => ExitCode::from(6),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}

impl From<NutricareError> for CliError {
    fn from(e: NutricareError) -> Self {
        let msg = e.to_string();
        match e {
            NutricareError::ArtifactLoad { .. } => Self::ArtifactLoad(msg),
            NutricareError::SchemaMismatch { .. }
            | NutricareError::UnsupportedSchemaVersion { .. }
            | NutricareError::EmptyClusterSet
            | NutricareError::EmptyCluster { .. } => Self::Schema(msg),
            NutricareError::UnknownCategory { .. }
            | NutricareError::InvalidRecord { .. }
            | NutricareError::NonFiniteFeature { .. }
            | NutricareError::DimensionMismatch { .. }
            | NutricareError::Json(_) => Self::InvalidInput(msg),
            NutricareError::Io(io) => Self::Io(io),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
