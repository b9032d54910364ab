//! Errors shared by the settings, profile and backup stores.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which kind of stored resource an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Settings,
    Profile,
    Backup,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Settings => write!(f, "Claude Code settings"),
            ResourceKind::Profile => write!(f, "Profile"),
            ResourceKind::Backup => write!(f, "Backup"),
        }
    }
}

/// Errors that can occur while reading or mutating stored state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: ResourceKind, id: String },

    #[error("Profile {id} already exists")]
    AlreadyExists { id: String },

    #[error("Failed to parse '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile: {reason}")]
    InvalidProfile { reason: String },

    #[error("Missing required field: ANTHROPIC_AUTH_TOKEN")]
    MissingAuthToken,

    #[error("Current config is already saved as profile '{id}'")]
    AlreadySaved { id: String },
}

impl StoreError {
    pub(crate) fn not_found(kind: ResourceKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn invalid_profile(reason: impl Into<String>) -> Self {
        StoreError::InvalidProfile {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for any `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
