use serde::{Deserialize, Serialize};

/// Claims carried by a session token: the subject (the account's email)
/// and an expiry in epoch seconds. Nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

#[derive(Serialize, Deserialize)]
pub struct TokenValidateRes {
    pub sub: String,
    pub exp: i64,
}
