use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, UserRegisterRes};
use crate::utils::password::hash_password;
use crate::utils::token::generate_token;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserRegisterRes> {
    let body = body.into_inner();
    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(AppError::Validation("password, email required".to_string())),
    };

    let password_hash = hash_password(&password);

    let user_id = db
        .create_user(DBUserCreate {
            email: email.clone(),
            password_hash,
        })
        .await?;
    tracing::info!(%user_id, "user registered");

    let token = generate_token(&email, &config.token_secret)
        .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))?;

    Ok(ApiResponse::Created(UserRegisterRes {
        message: "User registered".to_string(),
        token,
    }))
}
