use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 입찰 모델 (불변, 생성 후 수정/삭제되지 않는다)
#[derive(Serialize, Deserialize, sqlx::FromRow)]
pub struct Bid {
    pub id: i64,
    pub item_id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

// 입찰 이력 모델 (입찰자 표시 이름 포함)
#[derive(Serialize, Deserialize, sqlx::FromRow)]
pub struct BidEntry {
    pub id: i64,
    pub item_id: i64,
    pub user_id: i64,
    pub bidder_name: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}
