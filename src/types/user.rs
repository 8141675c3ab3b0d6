use serde::{Deserialize, Serialize};

/// Registration request body. Both fields are optional at the parse layer
/// so a missing field reports as "required", not as unparsable JSON.
#[derive(Serialize, Deserialize)]
pub struct RUserRegister {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UserRegisterRes {
    pub message: String,
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
}
