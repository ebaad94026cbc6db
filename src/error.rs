//! Error types for skillforge.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum SfError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Skill folder not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Skill directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Filesystem failure while scaffolding; `step` names what was being created.
    #[error("Error {step}: {source}")]
    Scaffold {
        step: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Carries the validation message verbatim.
    #[error("{0}")]
    ValidationFailed(String),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl SfError {
    /// Short machine-readable code used by robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
            Self::Config(_) => "config_error",
            Self::Json(_) => "serialization_error",
            Self::NotFound(_) => "not_found",
            Self::AlreadyExists(_) => "already_exists",
            Self::Scaffold { .. } => "scaffold_error",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Archive(_) => "archive_error",
            Self::Walk(_) => "walk_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, SfError>;
