//! Password validation for directory binds.
//!
//! A record stores one or more authentication methods, each a
//! [`StoredSecret`] keyed by its method identifier in an [`AuthMethodBag`].
//! [`CredentialValidator::validate`] tries the recognized schemes in a fixed
//! priority order and accepts on the first verifier that matches:
//!
//! 1. `SALTED-SHA512-PBKDF2`
//! 2. `SALTED-SHA512`
//! 3. `CRAM-MD5`
//! 4. `SMB-NT`
//! 5. `basic` (Argon2 PHC string, or cleartext)
//!
//! The outcome is a plain `bool`. A rejection never says which schemes were
//! present or tried, unrecognized methods are skipped, and every verifier
//! comparison is constant-time.
//!
//! The [`derive`] module produces stored secrets for provisioning.

pub mod derive;
mod error;
mod scheme;
mod secret;
mod validator;
mod verify;

pub use error::{AuthError, AuthResult};
pub use scheme::AuthScheme;
pub use secret::{AuthMethodBag, StoredSecret};
pub use validator::{CredentialValidator, ValidatorConfig};
