use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 단체 모델
#[derive(Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// 사용자 모델 (비밀번호 해시 포함, 응답으로는 직렬화하지 않는다)
#[derive(sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: String,
    pub org_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// 응답용 사용자 정보
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub org_id: Option<i64>,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        CurrentUser {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            org_id: user.org_id,
        }
    }
}

// 경매 모델
#[derive(Serialize, Deserialize, sqlx::FromRow)]
pub struct Auction {
    pub id: i64,
    pub org_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub ends_at: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 경매 목록 요약 (단체명과 출품 수 포함)
#[derive(Serialize, Deserialize, sqlx::FromRow)]
pub struct AuctionSummary {
    pub id: i64,
    pub org_id: i64,
    pub organization: String,
    pub name: String,
    pub description: Option<String>,
    pub ends_at: DateTime<Utc>,
    pub status: String,
    pub item_count: i64,
}

// 출품 상품 모델
#[derive(Serialize, Deserialize, sqlx::FromRow)]
pub struct AuctionItem {
    pub id: i64,
    pub auction_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub starting_bid: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 상품 조회 모델
// current_bid와 bids_count는 입찰 테이블에서 읽기 시점에 집계한 파생 값이다 (저장하지 않음)
#[derive(Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemListing {
    pub id: i64,
    pub auction_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub starting_bid: i64,
    pub current_bid: i64,
    pub bids_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
