// region:    --- Imports
use super::queries;
use crate::bidding::model::BidEntry;
use crate::catalog::model::{Auction, AuctionSummary, ItemListing, Organization, User};
use crate::database::DatabaseManager;
use sqlx::Error as SqlxError;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 이메일로 사용자 조회
pub async fn get_user_by_email(
    db_manager: &DatabaseManager,
    email: &str,
) -> Result<Option<User>, SqlxError> {
    let email = email.to_string();
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(queries::GET_USER_BY_EMAIL)
                    .bind(&email)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// id로 사용자 조회
pub async fn get_user_by_id(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Option<User>, SqlxError> {
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(queries::GET_USER_BY_ID)
                    .bind(user_id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// 진행 중인 경매 목록 조회
pub async fn get_active_auctions(
    db_manager: &DatabaseManager,
) -> Result<Vec<AuctionSummary>, SqlxError> {
    info!("{:<12} --> 진행 중인 경매 목록 조회", "Query");
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, AuctionSummary>(queries::GET_ACTIVE_AUCTIONS)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 경매 조회
pub async fn get_auction(
    db_manager: &DatabaseManager,
    auction_id: i64,
) -> Result<Auction, SqlxError> {
    info!("{:<12} --> 경매 조회 id: {}", "Query", auction_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::GET_AUCTION)
                    .bind(auction_id)
                    .fetch_one(&mut **tx)
                    .await
            })
        })
        .await
}

/// 단체 조회
pub async fn get_organization(
    db_manager: &DatabaseManager,
    org_id: i64,
) -> Result<Organization, SqlxError> {
    info!("{:<12} --> 단체 조회 id: {}", "Query", org_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Organization>(queries::GET_ORGANIZATION)
                    .bind(org_id)
                    .fetch_one(&mut **tx)
                    .await
            })
        })
        .await
}

/// 단체의 경매 목록 조회
pub async fn get_auctions_by_org(
    db_manager: &DatabaseManager,
    org_id: i64,
) -> Result<Vec<Auction>, SqlxError> {
    info!("{:<12} --> 단체 경매 목록 조회 org_id: {}", "Query", org_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::GET_AUCTIONS_BY_ORG)
                    .bind(org_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 경매의 상품 목록 조회 (현재 입찰가/입찰 수 파생 포함)
pub async fn get_auction_items(
    db_manager: &DatabaseManager,
    auction_id: i64,
) -> Result<Vec<ItemListing>, SqlxError> {
    info!(
        "{:<12} --> 경매 상품 목록 조회 auction_id: {}",
        "Query", auction_id
    );
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, ItemListing>(queries::GET_AUCTION_ITEMS)
                    .bind(auction_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 단체 전체 상품 목록 조회 (대시보드용)
pub async fn get_org_items(
    db_manager: &DatabaseManager,
    org_id: i64,
) -> Result<Vec<ItemListing>, SqlxError> {
    info!("{:<12} --> 단체 상품 목록 조회 org_id: {}", "Query", org_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, ItemListing>(queries::GET_ORG_ITEMS)
                    .bind(org_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 상품 조회
pub async fn get_item(
    db_manager: &DatabaseManager,
    item_id: i64,
) -> Result<ItemListing, SqlxError> {
    info!("{:<12} --> 상품 조회 id: {}", "Query", item_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, ItemListing>(queries::GET_ITEM)
                    .bind(item_id)
                    .fetch_one(&mut **tx)
                    .await
            })
        })
        .await
}

/// 상품 입찰 이력 조회
pub async fn get_item_bids(
    db_manager: &DatabaseManager,
    item_id: i64,
) -> Result<Vec<BidEntry>, SqlxError> {
    info!("{:<12} --> 상품 입찰 이력 조회 id: {}", "Query", item_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, BidEntry>(queries::GET_ITEM_BIDS)
                    .bind(item_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 단체 전체 입찰 이력 조회 (대시보드용)
pub async fn get_org_bids(
    db_manager: &DatabaseManager,
    org_id: i64,
) -> Result<Vec<BidEntry>, SqlxError> {
    info!("{:<12} --> 단체 입찰 이력 조회 org_id: {}", "Query", org_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, BidEntry>(queries::GET_ORG_BIDS)
                    .bind(org_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

// endregion: --- Query Handlers
