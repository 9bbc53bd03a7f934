//! Stored-secret derivation for provisioning.
//!
//! Each helper produces a [`StoredSecret`] that [`CredentialValidator`]
//! accepts for the same password under the matching method identifier.
//!
//! [`CredentialValidator`]: crate::CredentialValidator

use crate::verify::{LEGACY_SALT_LEN, MAX_PBKDF2_LEN, cram_md5_digest, nt_digest, salted_sha512_digest};
use crate::{AuthError, AuthResult, StoredSecret};
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha512;
use zeroize::Zeroizing;

/// Salt size used for freshly derived secrets.
pub const SALT_SIZE: usize = 32;

/// Iteration count used by [`salted_sha512_pbkdf2`].
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

/// Verifier length used by [`salted_sha512_pbkdf2`].
pub const PBKDF2_VERIFIER_LEN: usize = 128;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// `SALTED-SHA512-PBKDF2` with a random salt and the default iteration count.
pub fn salted_sha512_pbkdf2(password: &str) -> AuthResult<StoredSecret> {
    salted_sha512_pbkdf2_with_salt(
        password,
        &random_bytes(SALT_SIZE),
        DEFAULT_PBKDF2_ITERATIONS,
        PBKDF2_VERIFIER_LEN,
    )
}

/// `SALTED-SHA512-PBKDF2` with explicit parameters.
pub fn salted_sha512_pbkdf2_with_salt(
    password: &str,
    salt: &[u8],
    iterations: u32,
    verifier_len: usize,
) -> AuthResult<StoredSecret> {
    if iterations == 0 {
        return Err(AuthError::KeyDerivation("iteration count must be positive".into()));
    }
    if verifier_len == 0 || verifier_len > MAX_PBKDF2_LEN {
        return Err(AuthError::KeyDerivation(format!(
            "verifier length must be 1..={MAX_PBKDF2_LEN}, got {verifier_len}"
        )));
    }
    let mut derived = Zeroizing::new(vec![0u8; verifier_len]);
    pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, iterations, &mut derived);
    Ok(StoredSecret::new(derived.to_vec())
        .with_salt(salt)
        .with_iterations(iterations))
}

/// `SALTED-SHA512` in the legacy single-buffer layout: 4-byte salt followed
/// by the 64-byte digest.
pub fn salted_sha512(password: &str) -> StoredSecret {
    let salt = random_bytes(LEGACY_SALT_LEN);
    let digest = salted_sha512_digest(&salt, password);
    let mut verifier = salt;
    verifier.extend_from_slice(&digest);
    StoredSecret::new(verifier)
}

/// `CRAM-MD5` verifier over a given challenge.
pub fn cram_md5(password: &str, challenge: &[u8]) -> AuthResult<StoredSecret> {
    let digest = cram_md5_digest(password, challenge)
        .ok_or_else(|| AuthError::KeyDerivation("HMAC-MD5 rejected the key".into()))?;
    Ok(StoredSecret::new(digest.to_vec()).with_challenge(challenge))
}

/// `SMB-NT` verifier.
pub fn smb_nt(password: &str) -> StoredSecret {
    StoredSecret::new(nt_digest(password).to_vec())
}

/// Argon2id cost parameters for [`basic_argon2`].
#[derive(Clone, Debug)]
pub struct Argon2Params {
    /// Memory cost in KiB.
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_cost: 19 * 1024,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

/// `basic` verifier holding an Argon2id PHC string.
pub fn basic_argon2(password: &str, params: &Argon2Params) -> AuthResult<StoredSecret> {
    let argon2_params = Params::new(params.memory_cost, params.time_cost, params.parallelism, None)
        .map_err(|e| AuthError::KeyDerivation(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::KeyDerivation(e.to_string()))?;
    Ok(StoredSecret::new(hash.to_string()))
}

/// `basic` verifier holding the cleartext password.
pub fn basic_cleartext(password: &str) -> StoredSecret {
    StoredSecret::new(password)
}
