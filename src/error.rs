//! Error types for localcart
//!
//! All modules use `LocalcartResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for localcart operations
pub type LocalcartResult<T> = Result<T, LocalcartError>;

/// All errors that can occur in localcart
#[derive(Error, Debug)]
pub enum LocalcartError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Store errors
    #[error("Storage quota exceeded for {origin}: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        origin: String,
        needed: usize,
        quota: usize,
    },

    #[error("Store file is corrupt at {path}: {reason}")]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("Invalid origin: {origin}: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl LocalcartError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid origin error
    pub fn invalid_origin(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOrigin {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::QuotaExceeded { .. } => {
                Some("Remove entries with: localcart store remove <key>, or raise storage.quota_bytes")
            }
            Self::StoreCorrupt { .. } => Some("Delete the store file shown above to start over"),
            Self::InvalidOrigin { .. } => Some("Use the form scheme://host[:port]"),
            Self::ConfigInvalid { .. } => Some("Fix or remove the config file (see: localcart config path)"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LocalcartError::QuotaExceeded {
            origin: "http://localhost".to_string(),
            needed: 12,
            quota: 10,
        };
        assert!(err.to_string().contains("quota exceeded"));
        assert!(err.to_string().contains("http://localhost"));
    }

    #[test]
    fn error_hint() {
        let err = LocalcartError::invalid_origin("nope", "missing scheme");
        assert_eq!(err.hint(), Some("Use the form scheme://host[:port]"));
        assert!(LocalcartError::KeyNotFound("cart".into()).hint().is_none());
    }

    #[test]
    fn json_error_converts() {
        let err: LocalcartError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, LocalcartError::Json(_)));
    }
}
