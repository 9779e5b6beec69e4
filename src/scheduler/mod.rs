/// 경매 상태 업데이트 스케줄러
/// 종료 시각이 지난 active 경매를 completed 상태로 전환한다.
/// 경매 개시는 관리자 액션이므로 스케줄러가 관여하지 않는다.
// region:    --- Imports
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{debug, error};

// endregion: --- Imports

// region:    --- Auction Scheduler
/// 경매 종료 스케줄러
pub struct AuctionScheduler {
    pool: Arc<PgPool>,
}

impl AuctionScheduler {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// 경매 종료 스케줄러 시작
    pub async fn start(&self) {
        let pool = Arc::clone(&self.pool);
        tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(1)); // 1초마다 실행
            loop {
                interval.tick().await;
                if let Err(e) = Self::complete_ended_auctions(&pool).await {
                    error!(
                        "{:<12} --> 경매 종료 처리 중 오류 발생: {:?}",
                        "Scheduler", e
                    );
                }
            }
        });
    }

    /// 종료 시각이 지난 경매 완료 처리
    async fn complete_ended_auctions(pool: &PgPool) -> Result<(), sqlx::Error> {
        let now = Utc::now();

        // ACTIVE -> COMPLETED 상태 변경
        let result = sqlx::query(
            "UPDATE auctions SET status = 'completed', updated_at = $1
             WHERE status = 'active' AND ends_at <= $1",
        )
        .bind(now)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            debug!(
                "{:<12} --> 경매 {}건 종료 처리 완료",
                "Scheduler",
                result.rows_affected()
            );
        }

        Ok(())
    }
}
// endregion: --- Auction Scheduler
