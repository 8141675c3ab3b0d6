use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::EnvConfig;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenValidateRes;
use crate::utils::token::verify_token;

#[post("")]
async fn validate(
    auth: BearerAuth,
    config: web::Data<EnvConfig>,
) -> ApiResult<TokenValidateRes> {
    let claims = verify_token(auth.token(), &config.token_secret).ok_or(AppError::Unauthorized)?;

    Ok(ApiResponse::Ok(TokenValidateRes {
        sub: claims.sub,
        exp: claims.exp,
    }))
}
