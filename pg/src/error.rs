//! Plan loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make a plan file unusable as input
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to parse plan file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PlanError {
    /// Path of the plan file the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path } | Self::Malformed { path, .. } => path,
        }
    }
}
