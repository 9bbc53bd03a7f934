//! Stored credential material.

use crate::{AuthError, AuthResult};
use base64::{Engine, engine::general_purpose::STANDARD};
use easylogin_types::DirectoryValue;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret material for one authentication method.
///
/// `verifier` is what the password transform is compared against; the other
/// fields are scheme parameters. Buffers are wiped on drop.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct StoredSecret {
    verifier: Vec<u8>,
    salt: Option<Vec<u8>>,
    iterations: Option<u32>,
    challenge: Option<Vec<u8>>,
}

impl StoredSecret {
    pub fn new(verifier: impl Into<Vec<u8>>) -> Self {
        Self {
            verifier: verifier.into(),
            salt: None,
            iterations: None,
            challenge: None,
        }
    }

    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }

    #[must_use]
    pub fn with_challenge(mut self, challenge: impl Into<Vec<u8>>) -> Self {
        self.challenge = Some(challenge.into());
        self
    }

    pub fn verifier(&self) -> &[u8] {
        &self.verifier
    }

    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_deref()
    }

    pub fn iterations(&self) -> Option<u32> {
        self.iterations
    }

    pub fn challenge(&self) -> Option<&[u8]> {
        self.challenge.as_deref()
    }

    /// Reads a secret from a native record value.
    ///
    /// - bytes: the verifier itself
    /// - string: the verifier as UTF-8 (cleartext, PHC string or hex digest)
    /// - bag: `verifier`, `salt` and `challenge` as bytes or base64 text,
    ///   `iterations` as decimal text
    pub fn from_directory_value(value: &DirectoryValue) -> AuthResult<Self> {
        match value {
            DirectoryValue::Bytes(bytes) => Ok(Self::new(bytes.clone())),
            DirectoryValue::String(text) => Ok(Self::new(text.as_bytes())),
            DirectoryValue::Bag(fields) => {
                let verifier = fields
                    .get("verifier")
                    .ok_or_else(|| AuthError::MalformedSecret("missing verifier".into()))?;
                let mut secret = Self::new(binary_field("verifier", verifier)?);
                if let Some(salt) = fields.get("salt") {
                    secret.salt = Some(binary_field("salt", salt)?);
                }
                if let Some(challenge) = fields.get("challenge") {
                    secret.challenge = Some(binary_field("challenge", challenge)?);
                }
                if let Some(iterations) = fields.get("iterations") {
                    let parsed = iterations
                        .as_str()
                        .and_then(|s| s.trim().parse::<u32>().ok())
                        .ok_or_else(|| AuthError::MalformedSecret("iterations is not a count".into()))?;
                    secret.iterations = Some(parsed);
                }
                Ok(secret)
            }
            DirectoryValue::List(_) => Err(AuthError::MalformedSecret("list value".into())),
            DirectoryValue::Date(_) => Err(AuthError::MalformedSecret("date value".into())),
        }
    }
}

fn binary_field(name: &str, value: &DirectoryValue) -> AuthResult<Vec<u8>> {
    match value {
        DirectoryValue::Bytes(bytes) => Ok(bytes.clone()),
        DirectoryValue::String(text) => STANDARD
            .decode(text.trim())
            .map_err(|e| AuthError::MalformedSecret(format!("{name} is not base64: {e}"))),
        _ => Err(AuthError::MalformedSecret(format!("{name} must be bytes or base64 text"))),
    }
}

impl fmt::Debug for StoredSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSecret")
            .field("verifier", &"[REDACTED]")
            .field("salt", &self.salt.as_ref().map(|_| "[REDACTED]"))
            .field("iterations", &self.iterations)
            .field("challenge", &self.challenge.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Authentication methods of one record, keyed by method identifier.
#[derive(Clone, Default)]
pub struct AuthMethodBag(BTreeMap<String, StoredSecret>);

impl AuthMethodBag {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, method_id: impl Into<String>, secret: StoredSecret) -> Option<StoredSecret> {
        self.0.insert(method_id.into(), secret)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, method_id: impl Into<String>, secret: StoredSecret) -> Self {
        self.insert(method_id, secret);
        self
    }

    pub fn get(&self, method_id: &str) -> Option<&StoredSecret> {
        self.0.get(method_id)
    }

    pub fn contains(&self, method_id: &str) -> bool {
        self.0.contains_key(method_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn method_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Reads the `authMethods` bag of a native record.
    ///
    /// Entries that cannot be parsed are left out, which makes them behave
    /// exactly like unrecognized methods during validation.
    pub fn from_directory_value(value: &DirectoryValue) -> Self {
        let Some(fields) = value.as_bag() else {
            debug!("Authentication methods are not a bag, ignoring");
            return Self::new();
        };
        let mut bag = Self::new();
        for (method_id, raw) in fields {
            match StoredSecret::from_directory_value(raw) {
                Ok(secret) => {
                    bag.insert(method_id.clone(), secret);
                }
                Err(e) => debug!(method = %method_id, error = %e, "Skipping unreadable authentication method"),
            }
        }
        bag
    }
}

impl fmt::Debug for AuthMethodBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

impl<K: Into<String>> FromIterator<(K, StoredSecret)> for AuthMethodBag {
    fn from_iter<I: IntoIterator<Item = (K, StoredSecret)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
