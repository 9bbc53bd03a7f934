//! Per-scheme verification.
//!
//! Each function answers "does this password produce this stored secret".
//! A secret that is malformed for its scheme yields `false`, so it is
//! skipped exactly like an unrecognized method.

use crate::AuthScheme;
use crate::secret::StoredSecret;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use hmac::{Hmac, Mac};
use md4::Md4;
use md5::Md5;
use sha2::{Digest, Sha512};
use std::borrow::Cow;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

pub(crate) const SHA512_LEN: usize = 64;
pub(crate) const LEGACY_SALT_LEN: usize = 4;
pub(crate) const MAX_PBKDF2_LEN: usize = 128;
const MD5_LEN: usize = 16;
const NT_LEN: usize = 16;

/// Limits applied while verifying.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VerifyPolicy {
    pub allow_cleartext: bool,
    pub max_pbkdf2_iterations: u32,
}

pub(crate) fn verify(
    scheme: AuthScheme,
    password: &str,
    secret: &StoredSecret,
    policy: VerifyPolicy,
) -> bool {
    match scheme {
        AuthScheme::SaltedSha512Pbkdf2 => verify_pbkdf2(password, secret, policy.max_pbkdf2_iterations),
        AuthScheme::SaltedSha512 => verify_salted_sha512(password, secret),
        AuthScheme::CramMd5 => verify_cram_md5(password, secret),
        AuthScheme::SmbNt => verify_smb_nt(password, secret),
        AuthScheme::Basic => verify_basic(password, secret, policy.allow_cleartext),
    }
}

pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// A digest stored either raw (`len` bytes) or as hex text (`2 * len` chars).
fn decode_digest(stored: &[u8], len: usize) -> Option<Cow<'_, [u8]>> {
    if stored.len() == len {
        return Some(Cow::Borrowed(stored));
    }
    if stored.len() == len * 2 {
        return hex::decode(stored).ok().map(Cow::Owned);
    }
    None
}

fn verify_pbkdf2(password: &str, secret: &StoredSecret, max_iterations: u32) -> bool {
    let (Some(salt), Some(iterations)) = (secret.salt(), secret.iterations()) else {
        return false;
    };
    if iterations == 0 || iterations > max_iterations {
        return false;
    }
    let stored = secret.verifier();
    // Variable length, so hex is recognized by content rather than size.
    let expected: Cow<'_, [u8]> = if stored.len() % 2 == 0 && stored.iter().all(u8::is_ascii_hexdigit) {
        match hex::decode(stored) {
            Ok(bytes) => Cow::Owned(bytes),
            Err(_) => return false,
        }
    } else {
        Cow::Borrowed(stored)
    };
    if expected.is_empty() || expected.len() > MAX_PBKDF2_LEN {
        return false;
    }
    let mut derived = Zeroizing::new(vec![0u8; expected.len()]);
    pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, iterations, &mut derived);
    ct_eq(&derived, &expected)
}

pub(crate) fn salted_sha512_digest(salt: &[u8], password: &str) -> Zeroizing<Vec<u8>> {
    let mut hasher = Sha512::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    Zeroizing::new(hasher.finalize().to_vec())
}

fn verify_salted_sha512(password: &str, secret: &StoredSecret) -> bool {
    let stored = secret.verifier();
    let (salt, expected): (Cow<'_, [u8]>, Cow<'_, [u8]>) = match secret.salt() {
        Some(salt) => match decode_digest(stored, SHA512_LEN) {
            Some(digest) => (Cow::Borrowed(salt), digest),
            None => return false,
        },
        None => match decode_digest(stored, LEGACY_SALT_LEN + SHA512_LEN) {
            Some(Cow::Borrowed(layout)) => {
                let (salt, digest) = layout.split_at(LEGACY_SALT_LEN);
                (Cow::Borrowed(salt), Cow::Borrowed(digest))
            }
            Some(Cow::Owned(mut layout)) => {
                let digest = layout.split_off(LEGACY_SALT_LEN);
                (Cow::Owned(layout), Cow::Owned(digest))
            }
            None => return false,
        },
    };
    ct_eq(&salted_sha512_digest(&salt, password), &expected)
}

pub(crate) fn cram_md5_digest(password: &str, challenge: &[u8]) -> Option<Zeroizing<Vec<u8>>> {
    let mut mac = <Hmac<Md5> as Mac>::new_from_slice(password.as_bytes()).ok()?;
    mac.update(challenge);
    Some(Zeroizing::new(mac.finalize().into_bytes().to_vec()))
}

fn verify_cram_md5(password: &str, secret: &StoredSecret) -> bool {
    let Some(challenge) = secret.challenge() else {
        return false;
    };
    let Some(expected) = decode_digest(secret.verifier(), MD5_LEN) else {
        return false;
    };
    cram_md5_digest(password, challenge).is_some_and(|digest| ct_eq(&digest, &expected))
}

pub(crate) fn nt_digest(password: &str) -> Zeroizing<Vec<u8>> {
    let utf16: Zeroizing<Vec<u8>> =
        Zeroizing::new(password.encode_utf16().flat_map(u16::to_le_bytes).collect());
    Zeroizing::new(Md4::digest(utf16.as_slice()).to_vec())
}

fn verify_smb_nt(password: &str, secret: &StoredSecret) -> bool {
    match decode_digest(secret.verifier(), NT_LEN) {
        Some(expected) => ct_eq(&nt_digest(password), &expected),
        None => false,
    }
}

/// A stored value that parses as an Argon2 PHC string is verified with
/// Argon2; anything else, including `$argon2`-prefixed text that does not
/// parse, is treated as cleartext.
fn verify_basic(password: &str, secret: &StoredSecret, allow_cleartext: bool) -> bool {
    let stored = secret.verifier();
    if let Some(hash) = argon2_phc(stored) {
        return Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok();
    }
    allow_cleartext && ct_eq(password.as_bytes(), stored)
}

fn argon2_phc(stored: &[u8]) -> Option<PasswordHash<'_>> {
    let text = std::str::from_utf8(stored).ok()?;
    if !text.starts_with("$argon2") {
        return None;
    }
    PasswordHash::new(text).ok()
}
