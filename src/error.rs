//! Error types
//!
//! Every error here is fatal at setup time. Per-tick code never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or configuring locomotion.
#[derive(Debug, Error)]
pub enum LocomotionError {
    #[error("invalid configuration: `{field}` must be {requirement} (got {value})")]
    Configuration {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },

    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LocomotionError {
    pub(crate) fn config(field: &'static str, requirement: &'static str, value: f32) -> Self {
        Self::Configuration {
            field,
            requirement,
            value,
        }
    }
}
