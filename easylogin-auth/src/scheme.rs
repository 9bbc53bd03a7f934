use crate::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported authentication method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthScheme {
    /// PBKDF2-HMAC-SHA512 with stored salt and iteration count.
    #[serde(rename = "SALTED-SHA512-PBKDF2")]
    SaltedSha512Pbkdf2,
    /// SHA-512 over salt and password.
    #[serde(rename = "SALTED-SHA512")]
    SaltedSha512,
    /// HMAC-MD5 keyed by the password over a stored challenge.
    #[serde(rename = "CRAM-MD5")]
    CramMd5,
    /// MD4 over the UTF-16LE password (NT hash).
    #[serde(rename = "SMB-NT")]
    SmbNt,
    /// Argon2 PHC string, or stored cleartext.
    #[serde(rename = "basic")]
    Basic,
}

impl AuthScheme {
    /// Strongest first; cleartext-capable `basic` last.
    pub const DEFAULT_PRIORITY: [AuthScheme; 5] = [
        AuthScheme::SaltedSha512Pbkdf2,
        AuthScheme::SaltedSha512,
        AuthScheme::CramMd5,
        AuthScheme::SmbNt,
        AuthScheme::Basic,
    ];

    /// Identifier used as the key in an authentication method bag.
    pub const fn method_id(self) -> &'static str {
        match self {
            Self::SaltedSha512Pbkdf2 => "SALTED-SHA512-PBKDF2",
            Self::SaltedSha512 => "SALTED-SHA512",
            Self::CramMd5 => "CRAM-MD5",
            Self::SmbNt => "SMB-NT",
            Self::Basic => "basic",
        }
    }

    pub fn from_method_id(id: &str) -> Option<Self> {
        Self::DEFAULT_PRIORITY
            .into_iter()
            .find(|scheme| scheme.method_id() == id)
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_id())
    }
}

impl FromStr for AuthScheme {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_method_id(s).ok_or_else(|| AuthError::UnknownScheme(s.to_string()))
    }
}
