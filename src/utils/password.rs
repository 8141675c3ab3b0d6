use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand_core::{OsRng, RngCore};
use sha2::Sha256;

const PBKDF2_ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 16;
const DERIVED_KEY_LEN: usize = 32;

fn new_salt() -> String {
    let mut buf = [0u8; SALT_LEN];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    URL_SAFE.encode(buf)
}

// The salt string's own UTF-8 bytes feed the KDF, so the record is
// self-contained: everything needed to re-derive is left of the '$'.
fn derive_key(password: &str, salt: &str) -> String {
    let mut key = [0u8; DERIVED_KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut key,
    );
    URL_SAFE.encode(key)
}

/// Hash a password under a fresh random salt. Returns `salt$derived_key`,
/// both segments URL-safe base64.
pub fn hash_password(password: &str) -> String {
    hash_password_with_salt(password, &new_salt())
}

pub fn hash_password_with_salt(password: &str, salt: &str) -> String {
    format!("{}${}", salt, derive_key(password, salt))
}

/// Check a password against a stored record. A malformed record counts as
/// a failed match, never an error.
pub fn verify_password(password: &str, record: &str) -> bool {
    let parts: Vec<&str> = record.split('$').collect();
    if parts.len() != 2 {
        return false;
    }
    let (salt, stored) = (parts[0], parts[1]);
    let computed = derive_key(password, salt);
    constant_time_eq(computed.as_bytes(), stored.as_bytes())
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
