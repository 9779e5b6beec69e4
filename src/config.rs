// region:    --- Imports
use std::env;

// endregion: --- Imports

// region:    --- Config

/// 서비스 설정
/// 세션 서명 비밀키를 포함한 모든 전역 상태는 기동 시점에 주입한다.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    /// true일 경우 기동 시 데이터베이스를 재생성한다 (테스트/데모용)
    pub reset_database: bool,
    /// true일 경우 기동 시 데모 데이터를 시딩한다
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        Ok(AppConfig {
            database_url: env::var("DATABASE_URL")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            jwt_secret: env::var("JWT_SECRET")?,
            reset_database: env::var("RESET_DATABASE").map(|v| v == "1").unwrap_or(false),
            seed_demo_data: env::var("SEED_DEMO_DATA").map(|v| v == "1").unwrap_or(false),
        })
    }

    /// 서버 바인딩 주소
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

// endregion: --- Config
