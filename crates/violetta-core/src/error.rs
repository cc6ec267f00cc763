//! Error types for the Violetta application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Violetta application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ViolettaError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key/value storage error other than quota
    #[error("Storage error: {0}")]
    Storage(String),

    /// The storage backend refused a write because it would exceed its quota
    #[error("Storage quota exceeded writing '{key}' ({bytes} bytes)")]
    QuotaExceeded { key: String, bytes: usize },

    /// Backup file failed the top-level shape check
    #[error("Invalid backup: {0}")]
    InvalidBackup(String),

    /// Form-level validation error, reported next to the offending field
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ViolettaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a QuotaExceeded error
    pub fn quota_exceeded(key: impl Into<String>, bytes: usize) -> Self {
        Self::QuotaExceeded {
            key: key.into(),
            bytes,
        }
    }

    /// Creates an InvalidBackup error
    pub fn invalid_backup(message: impl Into<String>) -> Self {
        Self::InvalidBackup(message.into())
    }

    /// Creates a Validation error for a form field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a quota error
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    /// Check if this is an invalid backup error
    pub fn is_invalid_backup(&self) -> bool {
        matches!(self, Self::InvalidBackup(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns the offending field name for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ViolettaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ViolettaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ViolettaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ViolettaError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (used at the CLI boundary)
impl From<anyhow::Error> for ViolettaError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for ViolettaError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, ViolettaError>`.
pub type Result<T> = std::result::Result<T, ViolettaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_carries_field() {
        let err = ViolettaError::validation("email", "Enter a valid email");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("email"));
        assert_eq!(err.to_string(), "email: Enter a valid email");
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ViolettaError = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_quota_display() {
        let err = ViolettaError::quota_exceeded("violetta-journal", 42);
        assert!(err.is_quota_exceeded());
        assert!(err.to_string().contains("violetta-journal"));
    }
}
