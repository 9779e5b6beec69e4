// region:    --- Imports
use crate::auth;
use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- DatabaseManager

pub struct DatabaseManager {
    pub pool: Arc<PgPool>,
}

impl DatabaseManager {
    /// 데이터베이스 매니저 생성
    pub async fn new(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// 데이터베이스 풀 가져오기
    pub fn get_pool(&self) -> Arc<PgPool> {
        Arc::clone(&self.pool)
    }

    /// 트랜잭션 실행
    pub async fn transaction<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: for<'c> FnOnce(
            &'c mut sqlx::Transaction<'_, sqlx::Postgres>,
        ) -> Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>,
        E: From<sqlx::Error>,
    {
        let mut tx = self.pool.begin().await?;
        let result = f(&mut tx).await;
        match result {
            Ok(r) => {
                tx.commit().await?;
                Ok(r)
            }
            Err(e) => {
                tx.rollback().await?;
                Err(e)
            }
        }
    }

    /// 스키마 초기화 (존재하지 않는 테이블만 생성)
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        let create_schema_sql = include_str!("../sql/01-create-schema.sql");
        self.execute_multi_query(create_schema_sql).await?;
        Ok(())
    }

    /// 데이터베이스 재생성 (모든 테이블 삭제 후 스키마 재적용)
    pub async fn recreate_database(&self) -> Result<(), sqlx::Error> {
        let recreate_db_sql = include_str!("../sql/00-recreate-db.sql");
        self.execute_multi_query(recreate_db_sql).await?;
        self.initialize_database().await?;
        Ok(())
    }

    /// 여러 쿼리 실행
    async fn execute_multi_query(&self, sql: &str) -> Result<(), sqlx::Error> {
        for query in sql.split(';') {
            let query = query.trim();
            if !query.is_empty() {
                sqlx::query(query).execute(&*self.pool).await?;
            }
        }
        Ok(())
    }
}

// endregion: --- DatabaseManager

// region:    --- Demo Seed

/// 데모 데이터 시딩 (멱등)
/// 단체 2곳, 진행 중인 경매 2건, 단체별 관리자 계정 1개를 생성한다.
pub async fn seed_demo_data(db: &DatabaseManager) -> Result<(), AppError> {
    let riverdale = ensure_organization(
        db,
        "Riverdale Community Foundation",
        Some("Community projects across the Riverdale area."),
    )
    .await?;
    let westside = ensure_organization(
        db,
        "Westside Elementary PTA",
        Some("Parent-teacher association of Westside Elementary."),
    )
    .await?;

    ensure_auction(
        db,
        riverdale,
        "Spring Gala 2026",
        Some("Annual fundraising gala for the Riverdale Community Foundation."),
        chrono::Utc::now() + chrono::Duration::hours(48),
    )
    .await?;
    ensure_auction(
        db,
        westside,
        "Spring Carnival Fundraiser",
        Some("Westside Elementary PTA spring carnival silent auction."),
        chrono::Utc::now() + chrono::Duration::hours(36),
    )
    .await?;

    ensure_admin(db, "admin@riverdale.org", "Rita", "Vale", riverdale).await?;
    ensure_admin(db, "admin@westside.org", "Wes", "Nguyen", westside).await?;

    info!("{:<12} --> 데모 데이터 시딩 완료", "Seed");
    Ok(())
}

/// 이름 기준으로 단체를 보장 (없으면 생성)
async fn ensure_organization(
    db: &DatabaseManager,
    name: &str,
    description: Option<&str>,
) -> Result<i64, AppError> {
    let name = name.to_string();
    let description = description.map(str::to_string);
    db.transaction(|tx| {
        Box::pin(async move {
            if let Some(row) = sqlx::query("SELECT id FROM organizations WHERE name = $1")
                .bind(&name)
                .fetch_optional(&mut **tx)
                .await?
            {
                return Ok(row.get("id"));
            }
            let row = sqlx::query(
                "INSERT INTO organizations (name, description) VALUES ($1, $2) RETURNING id",
            )
            .bind(&name)
            .bind(&description)
            .fetch_one(&mut **tx)
            .await?;
            Ok(row.get("id"))
        })
    })
    .await
}

/// 단체+이름 기준으로 경매를 보장 (없으면 active 상태로 생성)
async fn ensure_auction(
    db: &DatabaseManager,
    org_id: i64,
    name: &str,
    description: Option<&str>,
    ends_at: chrono::DateTime<chrono::Utc>,
) -> Result<i64, AppError> {
    let name = name.to_string();
    let description = description.map(str::to_string);
    db.transaction(|tx| {
        Box::pin(async move {
            if let Some(row) =
                sqlx::query("SELECT id FROM auctions WHERE org_id = $1 AND name = $2")
                    .bind(org_id)
                    .bind(&name)
                    .fetch_optional(&mut **tx)
                    .await?
            {
                return Ok(row.get("id"));
            }
            let row = sqlx::query(
                "INSERT INTO auctions (org_id, name, description, ends_at, status)
                 VALUES ($1, $2, $3, $4, 'active') RETURNING id",
            )
            .bind(org_id)
            .bind(&name)
            .bind(&description)
            .bind(ends_at)
            .fetch_one(&mut **tx)
            .await?;
            Ok(row.get("id"))
        })
    })
    .await
}

/// 관리자 계정 보장 (없으면 생성, 초기 비밀번호: password123)
async fn ensure_admin(
    db: &DatabaseManager,
    email: &str,
    first_name: &str,
    last_name: &str,
    org_id: i64,
) -> Result<(), AppError> {
    let password_hash = auth::hash_password("password123")?;
    let email = email.to_string();
    let first_name = first_name.to_string();
    let last_name = last_name.to_string();
    let created: bool = db
        .transaction(|tx| {
            Box::pin(async move {
                if sqlx::query("SELECT id FROM users WHERE email = $1")
                    .bind(&email)
                    .fetch_optional(&mut **tx)
                    .await?
                    .is_some()
                {
                    return Ok::<bool, AppError>(false);
                }
                sqlx::query(
                    "INSERT INTO users (email, first_name, last_name, password_hash, role, org_id)
                     VALUES ($1, $2, $3, $4, 'admin', $5)",
                )
                .bind(&email)
                .bind(&first_name)
                .bind(&last_name)
                .bind(&password_hash)
                .bind(org_id)
                .execute(&mut **tx)
                .await?;
                Ok(true)
            })
        })
        .await?;
    if created {
        info!("{:<12} --> 관리자 계정 생성 완료", "Seed");
    }
    Ok(())
}

// endregion: --- Demo Seed
