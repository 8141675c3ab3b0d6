use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::types::token::Claims;

/// Session token lifetime in seconds.
pub const TOKEN_TTL_SECS: i64 = 3600;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Sign a session token for `subject` (the account's email). Expiry is
/// always issuance + [`TOKEN_TTL_SECS`].
pub fn generate_token(
    subject: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: subject.to_owned(),
        exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Decode a token, checking signature and expiry with zero leeway. Any
/// failure is `None`; callers never need to distinguish why a token was
/// rejected.
pub fn verify_token(token: &str, secret: &str) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .ok()
}
