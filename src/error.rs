//! Error types for the import pipeline
//!
//! Every failure here is fatal to the run; there are no retries. The one
//! non-error outcome that looks like a failure — an SVG with no entry in
//! the mapping configuration — is reported as [`crate::Outcome::Skipped`]
//! instead of an error.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal errors raised while importing an SVG outline into a UFO.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The mapping configuration is malformed or holds an unusable value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The SVG outline document is malformed or missing dimensions.
    #[error("invalid SVG outline: {0}")]
    Svg(String),

    /// A UFO metadata or registry file could not be read.
    #[error("the file {} could not be read: {message}", path.display())]
    Registry { path: PathBuf, message: String },

    /// A glif or plist write failed.
    #[error("failed to write {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ImportError {
    pub fn registry(path: &Path, message: impl ToString) -> Self {
        Self::Registry {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn persist(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Persist {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
