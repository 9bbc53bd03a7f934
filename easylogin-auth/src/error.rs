//! Error types for the authentication layer.
//!
//! Validation itself never fails with an error; these cover parsing stored
//! secrets, deriving new ones and checking configuration.

use thiserror::Error;

/// Result type for authentication helpers.
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Method identifier outside the supported set.
    #[error("unknown authentication method: {0}")]
    UnknownScheme(String),

    /// Stored secret does not have the structure its scheme needs.
    #[error("malformed stored secret: {0}")]
    MalformedSecret(String),

    /// Key derivation failed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Validator configuration is inconsistent.
    #[error("invalid validator configuration: {0}")]
    InvalidConfig(String),
}
