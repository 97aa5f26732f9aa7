//! Probe error types

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single probe invocation
///
/// Every variant belongs to one of two kinds, reported by [`ProbeError::kind`]:
/// database connection failures and scratch file I/O failures.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Database parameter {variable} is not set")]
    MissingDatabaseParameter { variable: &'static str },

    #[error("Invalid database port '{value}'")]
    InvalidDatabasePort { value: String },

    #[error("File I/O error on {}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification used when reporting a probe failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeErrorKind {
    DatabaseConnection,
    FileIo,
}

impl ProbeError {
    /// Create a FileIo error with the path it occurred on
    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ProbeErrorKind {
        match self {
            ProbeError::DatabaseConnection(_)
            | ProbeError::MissingDatabaseParameter { .. }
            | ProbeError::InvalidDatabasePort { .. } => ProbeErrorKind::DatabaseConnection,
            ProbeError::FileIo { .. } => ProbeErrorKind::FileIo,
        }
    }
}

/// Result type alias for ProbeError
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_errors_are_database_kind() {
        let missing = ProbeError::MissingDatabaseParameter { variable: "DB_HOST" };
        let port = ProbeError::InvalidDatabasePort {
            value: "abc".to_string(),
        };
        assert_eq!(missing.kind(), ProbeErrorKind::DatabaseConnection);
        assert_eq!(port.kind(), ProbeErrorKind::DatabaseConnection);
        assert_eq!(missing.to_string(), "Database parameter DB_HOST is not set");
    }

    #[test]
    fn test_file_io_display_includes_path() {
        let err = ProbeError::file_io(
            "/staging/scratch.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ProbeErrorKind::FileIo);
        assert!(err.to_string().contains("/staging/scratch.txt"));
        assert!(err.to_string().contains("denied"));
    }
}
