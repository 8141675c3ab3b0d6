use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // the client's fault
    #[error("invalid JSON body")]
    InvalidJson,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("already exists")]
    AlreadyExists,
    #[error("unauthorized")]
    Unauthorized,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl AppError {
    /// The caller-facing message. Infra failures all collapse to the same
    /// opaque string; the real cause only ever reaches the log.
    fn public_message(&self) -> &str {
        match self {
            Self::InvalidJson => "Invalid JSON",
            Self::Validation(msg) => msg,
            Self::AlreadyExists => "User already exists",
            Self::Unauthorized => "Invalid token",
            Self::Db(_) | Self::Internal(_) => "Server error",
        }
    }

    fn from_db(err: DbErr) -> Self {
        // Two concurrent signups can both pass the existence check; the
        // loser hits the unique index on email and belongs on the 409
        // path, not the 500 one.
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidJson | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.public_message(),
        })
    }
}
