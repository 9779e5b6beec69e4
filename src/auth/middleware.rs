// region:    --- Imports
use crate::auth;
use crate::error::AppError;
use crate::AppState;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::info;

// endregion: --- Imports

// region:    --- Middleware

/// 요청 헤더에서 세션 클레임 추출
fn claims_from_request(req: &Request, jwt_secret: &str) -> Option<auth::Claims> {
    let cookie_header = req.headers().get(header::COOKIE)?.to_str().ok()?;
    let token = auth::token_from_cookie_header(cookie_header)?;
    auth::verify_token(jwt_secret, token).ok()
}

/// 관리자 라우트 보호 미들웨어
/// 쿠키가 없거나 토큰이 유효하지 않으면 로그인 페이지로 리다이렉트한다 (오류 미노출)
pub async fn require_admin(
    State((_, config)): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(claims) = claims_from_request(&req, &config.jwt_secret) else {
        return Redirect::to("/login").into_response();
    };
    if claims.role != "admin" {
        info!("{:<12} --> 관리자 아님, 리다이렉트 id: {}", "Auth", claims.sub);
        return Redirect::to("/login").into_response();
    }
    req.extensions_mut().insert(claims);
    next.run(req).await
}

/// 입찰 라우트 보호 미들웨어
/// 세션이 없으면 401 JSON으로 응답한다
pub async fn require_session(
    State((_, config)): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(claims) = claims_from_request(&req, &config.jwt_secret) else {
        return AppError::Unauthorized("Authentication required".to_string()).into_response();
    };
    req.extensions_mut().insert(claims);
    next.run(req).await
}

// endregion: --- Middleware
