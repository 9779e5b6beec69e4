/// 카탈로그 관련 커맨드 처리 (관리자 전용)
/// 1. 경매 생성
/// 2. 상품 등록
/// 3. 경매 개시
// region:    --- Imports
use crate::catalog::model::{Auction, AuctionItem};
use crate::database::DatabaseManager;
use crate::error::AppError;
use crate::query::queries;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

// endregion: --- Imports

// region:    --- Commands

/// 경매 생성 명령
#[derive(Debug, Deserialize)]
pub struct CreateAuctionCommand {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ends_at: DateTime<Utc>,
}

/// 상품 등록 명령
#[derive(Debug, Deserialize)]
pub struct AddItemCommand {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub starting_bid: i64,
}

/// 1. 경매 생성 (draft 상태로 생성된다)
pub async fn create_auction(
    db: &DatabaseManager,
    org_id: i64,
    cmd: CreateAuctionCommand,
) -> Result<Auction, AppError> {
    info!("{:<12} --> 경매 생성 요청 처리: {:?}", "Command", cmd);
    if cmd.name.trim().is_empty() {
        return Err(AppError::Validation("Auction name is required".to_string()));
    }
    if cmd.ends_at <= Utc::now() {
        return Err(AppError::Validation(
            "Auction end time must be in the future".to_string(),
        ));
    }

    db.transaction(|tx| {
        Box::pin(async move {
            let auction = sqlx::query_as::<_, Auction>(queries::INSERT_AUCTION)
                .bind(org_id)
                .bind(cmd.name.trim())
                .bind(&cmd.description)
                .bind(cmd.ends_at)
                .fetch_one(&mut **tx)
                .await?;
            Ok(auction)
        })
    })
    .await
}

/// 2. 상품 등록 (경매가 요청 관리자의 단체 소속인 경우에만)
pub async fn add_item(
    db: &DatabaseManager,
    org_id: i64,
    auction_id: i64,
    cmd: AddItemCommand,
) -> Result<AuctionItem, AppError> {
    info!(
        "{:<12} --> 상품 등록 요청 처리 auction_id: {}",
        "Command", auction_id
    );
    if cmd.title.trim().is_empty() {
        return Err(AppError::Validation("Item title is required".to_string()));
    }
    if cmd.starting_bid <= 0 {
        return Err(AppError::Validation(
            "Starting bid must be a positive amount in minor units".to_string(),
        ));
    }

    db.transaction(|tx| {
        Box::pin(async move {
            // 다른 단체의 경매에는 등록할 수 없다
            let owned = sqlx::query(queries::GET_AUCTION_FOR_ORG)
                .bind(auction_id)
                .bind(org_id)
                .fetch_optional(&mut **tx)
                .await?;
            if owned.is_none() {
                return Err(AppError::NotFound(format!(
                    "auction {} not found",
                    auction_id
                )));
            }

            let item = sqlx::query_as::<_, AuctionItem>(queries::INSERT_ITEM)
                .bind(auction_id)
                .bind(cmd.title.trim())
                .bind(&cmd.description)
                .bind(&cmd.image_url)
                .bind(cmd.starting_bid)
                .fetch_one(&mut **tx)
                .await?;
            Ok(item)
        })
    })
    .await
}

/// 3. 경매 개시 (draft -> active)
pub async fn activate_auction(
    db: &DatabaseManager,
    org_id: i64,
    auction_id: i64,
) -> Result<Auction, AppError> {
    info!(
        "{:<12} --> 경매 개시 요청 처리 auction_id: {}",
        "Command", auction_id
    );
    db.transaction(|tx| {
        Box::pin(async move {
            if let Some(auction) = sqlx::query_as::<_, Auction>(queries::ACTIVATE_AUCTION)
                .bind(auction_id)
                .bind(org_id)
                .fetch_optional(&mut **tx)
                .await?
            {
                return Ok(auction);
            }

            // 개시 실패 원인 구분: 대상 없음 vs 잘못된 상태
            let exists = sqlx::query(queries::GET_AUCTION_FOR_ORG)
                .bind(auction_id)
                .bind(org_id)
                .fetch_optional(&mut **tx)
                .await?;
            match exists {
                None => Err(AppError::NotFound(format!(
                    "auction {} not found",
                    auction_id
                ))),
                Some(_) => Err(AppError::conflict(
                    "INVALID_STATUS",
                    "Only draft auctions can be activated",
                )),
            }
        })
    })
    .await
}

// endregion: --- Commands
