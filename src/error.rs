// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Error types for rakeshift.
//!
//! The rewrite rules themselves cannot fail; the only failure surfaces are
//! file I/O and rule-table compilation.

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur while rewriting a source file.
#[derive(Debug, Clone)]
pub enum RewriteError {
    /// Input file could not be read
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// Output or backup file could not be written
    Write {
        /// Path that failed to write
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// A rule pattern failed to compile
    InvalidRule {
        /// Rule name
        rule: String,
        /// Compilation error message
        reason: String,
    },
}

impl RewriteError {
    /// Create a read error from an I/O error.
    pub fn read(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        RewriteError::Read {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Create a write error from an I/O error.
    pub fn write(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        RewriteError::Write {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Create an invalid rule error.
    pub fn invalid_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        RewriteError::InvalidRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::Read { path, message } => {
                write!(f, "Failed to read '{}': {message}", path.display())
            }
            RewriteError::Write { path, message } => {
                write!(f, "Failed to write '{}': {message}", path.display())
            }
            RewriteError::InvalidRule { rule, reason } => {
                write!(f, "Invalid rule '{rule}': {reason}")
            }
        }
    }
}

impl std::error::Error for RewriteError {}

/// Result type for rakeshift operations.
pub type Result<T> = std::result::Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = RewriteError::read("queries.sql", &io);
        assert!(matches!(err, RewriteError::Read { .. }));
        assert_eq!(err.to_string(), "Failed to read 'queries.sql': file not found");
    }

    #[test]
    fn test_write_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = RewriteError::write("queries.sql.backup", &io);
        assert!(matches!(err, RewriteError::Write { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to write 'queries.sql.backup': permission denied"
        );
    }

    #[test]
    fn test_invalid_rule_display() {
        let err = RewriteError::invalid_rule("where-bare", "unclosed group");
        assert!(matches!(err, RewriteError::InvalidRule { .. }));
        assert_eq!(err.to_string(), "Invalid rule 'where-bare': unclosed group");
    }

    #[test]
    fn test_error_clone() {
        let err1 = RewriteError::invalid_rule("rule", "reason");
        let err2 = err1.clone();
        assert_eq!(err1.to_string(), err2.to_string());
    }
}
