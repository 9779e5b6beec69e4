// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

// endregion: --- Imports

// region:    --- AppError

/// 서비스 공통 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 입력값 검증 실패 (400)
    #[error("{0}")]
    Validation(String),

    /// 인증 실패 (401)
    #[error("{0}")]
    Unauthorized(String),

    /// 대상 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 도메인 충돌 (409) - 기계 판독용 코드와 부가 정보를 함께 전달한다
    #[error("{message}")]
    Conflict {
        message: String,
        code: &'static str,
        detail: Option<serde_json::Value>,
    },

    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// 409 충돌 에러 생성
    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Conflict {
            message: message.into(),
            code,
            detail: None,
        }
    }

    /// 부가 정보를 포함한 409 충돌 에러 생성
    pub fn conflict_with(
        code: &'static str,
        message: impl Into<String>,
        detail: serde_json::Value,
    ) -> Self {
        AppError::Conflict {
            message: message.into(),
            code,
            detail: Some(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Database(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Conflict { code, .. } => (StatusCode::CONFLICT, *code),
            AppError::PasswordHash(_) | AppError::Token(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
            }
        };

        let mut body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
            "code": code,
        });
        if let AppError::Conflict {
            detail: Some(detail),
            ..
        } = &self
        {
            body["detail"] = detail.clone();
        }

        (status, Json(body)).into_response()
    }
}

// endregion: --- AppError
