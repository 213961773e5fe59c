//! Typed errors for the member query layer
//!
//! Queries that filter or search never fail: they return empty results. Only
//! aggregates with no defined value over an empty collection (average, max)
//! produce an error, along with roster loading.
//!
//! # Error Categories
//!
//! - [`MemberError::EmptyCollection`]: an aggregate was requested over no members
//! - [`ConfigError`]: the roster could not be loaded
//!
//! # Example
//!
//! ```rust,ignore
//! use got::prelude::*;
//!
//! match dao.average_salary() {
//!     Ok(avg) => println!("average: {avg}"),
//!     Err(MemberError::EmptyCollection { operation }) => {
//!         println!("{operation} needs at least one member");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```

use std::io;
use std::path::Path;
use thiserror::Error;

/// The main error type of the crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberError {
    /// An aggregate with no defined result was requested over an empty collection
    #[error("cannot compute {operation} over an empty member collection")]
    EmptyCollection { operation: String },

    /// Roster loading errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MemberError {
    pub fn empty(operation: impl Into<String>) -> Self {
        MemberError::EmptyCollection {
            operation: operation.into(),
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MemberError::EmptyCollection { .. } => "EMPTY_COLLECTION",
            MemberError::Config(e) => e.error_code(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading a roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Roster file does not exist
    #[error("roster file not found: {path}")]
    FileNotFound { path: String },

    /// Roster file exists but could not be read
    #[error("failed to read roster file {path}: {message}")]
    Io { path: String, message: String },

    /// Roster document is malformed
    #[error("failed to parse roster: {message}")]
    ParseError { message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
        }
    }

    /// Classify a failed read of the roster file at `path`
    ///
    /// Only a missing file is `FileNotFound`; content that is not UTF-8 is a
    /// `ParseError`; anything else (directories, permissions) is `Io`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => ConfigError::FileNotFound { path },
            io::ErrorKind::InvalidData => ConfigError::ParseError {
                message: format!("{path}: {err}"),
            },
            _ => ConfigError::Io {
                path,
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for member queries
pub type MemberResult<T> = Result<T, MemberError>;
