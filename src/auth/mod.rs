/// 세션 발급/검증
/// 1. 비밀번호 해시 (bcrypt)
/// 2. 서명 토큰 (HS256 JWT, 7일 만료)
/// 3. HTTP-only 쿠키 (auth-token)
// region:    --- Imports
use crate::catalog::model::{CurrentUser, User};
use crate::database::DatabaseManager;
use crate::error::AppError;
use crate::query;
use bcrypt::DEFAULT_COST;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod middleware;

// endregion: --- Imports

// region:    --- Constants

/// 세션 쿠키 이름
pub const COOKIE_NAME: &str = "auth-token";

/// 세션 유효 기간 (7일)
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

// endregion: --- Constants

// region:    --- Password Helpers

/// 비밀번호 해시
pub fn hash_password(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, DEFAULT_COST)
}

/// 비밀번호 검증
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(plain, hashed)
}

// endregion: --- Password Helpers

// region:    --- Token Helpers

/// 세션 토큰 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 id
    pub sub: i64,
    pub email: String,
    pub role: String,
    pub org_id: Option<i64>,
    pub iat: i64,
    pub exp: i64,
}

/// 세션 토큰 생성
pub fn create_token(secret: &str, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.clone(),
        org_id: user.org_id,
        iat: now,
        exp: now + SESSION_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// 세션 토큰 검증 (서명 + 만료)
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

// endregion: --- Token Helpers

// region:    --- Cookie Helpers

/// 세션 쿠키 생성
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        COOKIE_NAME, token, SESSION_TTL_SECS
    )
}

/// 세션 쿠키 제거 (로그아웃)
pub fn expired_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", COOKIE_NAME)
}

/// Cookie 헤더에서 세션 토큰 추출
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').map(str::trim).find_map(|pair| {
        let rest = pair.strip_prefix(COOKIE_NAME)?;
        rest.strip_prefix('=')
    })
}

// endregion: --- Cookie Helpers

// region:    --- Auth Actions

/// 회원 가입 요청
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "firstName")]
    pub first_name: String,
    #[serde(default, rename = "lastName")]
    pub last_name: String,
}

/// 로그인 요청
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// 회원 가입 처리: bidder 역할의 사용자 생성 후 세션 토큰 발급
pub async fn signup(
    db: &DatabaseManager,
    jwt_secret: &str,
    req: SignupRequest,
) -> Result<(CurrentUser, String), AppError> {
    if req.email.is_empty()
        || req.password.is_empty()
        || req.first_name.is_empty()
        || req.last_name.is_empty()
    {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    if query::handlers::get_user_by_email(db, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            "EMAIL_TAKEN",
            "Email already registered",
        ));
    }

    let password_hash = hash_password(&req.password)?;
    let user = db
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(query::queries::INSERT_USER)
                    .bind(&req.email)
                    .bind(&req.first_name)
                    .bind(&req.last_name)
                    .bind(&password_hash)
                    .fetch_one(&mut **tx)
                    .await
            })
        })
        .await
        .map_err(|e: sqlx::Error| match &e {
            // 중복 이메일 동시 가입 경합은 유니크 제약으로 잡는다
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                AppError::conflict("EMAIL_TAKEN", "Email already registered")
            }
            _ => AppError::Database(e),
        })?;

    let token = create_token(jwt_secret, &user)?;
    info!("{:<12} --> 회원 가입 완료 id: {}", "Auth", user.id);
    Ok((CurrentUser::from(user), token))
}

/// 로그인 처리: 이메일/비밀번호 검증 후 세션 토큰 발급
/// 존재하지 않는 이메일과 잘못된 비밀번호는 동일한 메시지로 응답한다 (계정 열거 방지)
pub async fn login(
    db: &DatabaseManager,
    jwt_secret: &str,
    req: LoginRequest,
) -> Result<(CurrentUser, String), AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let Some(user) = query::handlers::get_user_by_email(db, &req.email).await? else {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    };

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = create_token(jwt_secret, &user)?;
    info!("{:<12} --> 로그인 완료 id: {}", "Auth", user.id);
    Ok((CurrentUser::from(user), token))
}

// endregion: --- Auth Actions

// region:    --- Tests


// endregion: --- Tests
