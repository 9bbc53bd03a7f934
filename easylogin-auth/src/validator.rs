//! Scheme-priority password validation.

use crate::secret::AuthMethodBag;
use crate::verify::{VerifyPolicy, verify};
use crate::{AuthError, AuthResult, AuthScheme};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// Validator settings, usually the `[auth]` table of the toolbox config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    #[serde(default = "default_scheme_priority")]
    pub scheme_priority: Vec<AuthScheme>,
    /// Whether `basic` may compare against stored cleartext.
    #[serde(default = "default_allow_cleartext")]
    pub allow_cleartext: bool,
    /// PBKDF2 secrets above this iteration count are skipped.
    #[serde(default = "default_max_pbkdf2_iterations")]
    pub max_pbkdf2_iterations: u32,
}

fn default_scheme_priority() -> Vec<AuthScheme> {
    AuthScheme::DEFAULT_PRIORITY.to_vec()
}

fn default_allow_cleartext() -> bool {
    true
}

fn default_max_pbkdf2_iterations() -> u32 {
    1_000_000
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            scheme_priority: default_scheme_priority(),
            allow_cleartext: default_allow_cleartext(),
            max_pbkdf2_iterations: default_max_pbkdf2_iterations(),
        }
    }
}

impl ValidatorConfig {
    pub fn validate(&self) -> AuthResult<()> {
        if self.scheme_priority.is_empty() {
            return Err(AuthError::InvalidConfig("scheme_priority is empty".into()));
        }
        let mut seen = HashSet::new();
        for scheme in &self.scheme_priority {
            if !seen.insert(*scheme) {
                return Err(AuthError::InvalidConfig(format!(
                    "scheme_priority lists {scheme} more than once"
                )));
            }
        }
        if self.max_pbkdf2_iterations == 0 {
            return Err(AuthError::InvalidConfig(
                "max_pbkdf2_iterations must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Checks passwords against a record's authentication methods.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    priority: Vec<AuthScheme>,
    policy: VerifyPolicy,
}

impl CredentialValidator {
    pub fn new(config: ValidatorConfig) -> AuthResult<Self> {
        config.validate()?;
        Ok(Self {
            priority: config.scheme_priority,
            policy: VerifyPolicy {
                allow_cleartext: config.allow_cleartext,
                max_pbkdf2_iterations: config.max_pbkdf2_iterations,
            },
        })
    }

    pub fn priority(&self) -> &[AuthScheme] {
        &self.priority
    }

    /// Returns `true` as soon as one recognized method accepts `password`.
    ///
    /// An empty password is always rejected. Methods whose identifier is not
    /// in the priority list are ignored.
    pub fn validate(&self, password: &str, methods: &AuthMethodBag) -> bool {
        if password.is_empty() {
            trace!("Rejecting empty password");
            return false;
        }
        for &scheme in &self.priority {
            let Some(secret) = methods.get(scheme.method_id()) else {
                continue;
            };
            if verify(scheme, password, secret, self.policy) {
                trace!(scheme = %scheme, "Password accepted");
                return true;
            }
            trace!(scheme = %scheme, "Verifier did not match");
        }
        false
    }
}

impl Default for CredentialValidator {
    fn default() -> Self {
        let config = ValidatorConfig::default();
        Self {
            priority: config.scheme_priority,
            policy: VerifyPolicy {
                allow_cleartext: config.allow_cleartext,
                max_pbkdf2_iterations: config.max_pbkdf2_iterations,
            },
        }
    }
}
