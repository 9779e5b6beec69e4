/// 입찰 관련 커맨드 처리
/// 상품 행 잠금 후 현재 최고가 검증과 입찰 행 삽입을 한 트랜잭션에서 수행한다.
// region:    --- Imports
use crate::bidding::model::Bid;
use crate::database::DatabaseManager;
use crate::error::AppError;
use crate::query::queries;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Commands

/// 입찰 명령 (입찰자는 세션에서 결정된다)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub item_id: i64,
    pub amount: i64,
}

/// 입찰 처리
/// 수락 규칙: 첫 입찰은 시작가 이상, 이후 입찰은 현재 최고가 초과.
/// FOR UPDATE로 상품 행을 잠가 동시 입찰을 직렬화하므로
/// 현재 최고가 이하의 입찰이 기록되는 일은 없다.
pub async fn handle_place_bid(
    db: &DatabaseManager,
    bidder_id: i64,
    cmd: PlaceBidCommand,
) -> Result<Bid, AppError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

    if cmd.amount <= 0 {
        return Err(AppError::Validation(
            "Bid amount must be a positive amount in minor units".to_string(),
        ));
    }

    db.transaction(|tx| {
        Box::pin(async move {
            // 상품 행 잠금 (경매 정보 포함)
            let Some(item) = sqlx::query(queries::LOCK_ITEM_FOR_BID)
                .bind(cmd.item_id)
                .fetch_optional(&mut **tx)
                .await?
            else {
                return Err(AppError::NotFound(format!(
                    "item {} not found",
                    cmd.item_id
                )));
            };

            let starting_bid: i64 = item.get("starting_bid");
            let status: String = item.get("status");
            let ends_at: DateTime<Utc> = item.get("ends_at");
            let now = Utc::now();

            // 경매 상태 및 시간 검증
            match status.as_str() {
                "draft" => {
                    return Err(AppError::conflict(
                        "NOT_ACTIVE",
                        "Auction is not open for bidding",
                    ))
                }
                "completed" => {
                    return Err(AppError::conflict(
                        "ALREADY_ENDED",
                        "Auction has already ended",
                    ))
                }
                _ if now > ends_at => {
                    return Err(AppError::conflict(
                        "ALREADY_ENDED",
                        "Auction has already ended",
                    ))
                }
                "active" => {}
                _ => {
                    return Err(AppError::conflict(
                        "INVALID_STATUS",
                        "Invalid auction status",
                    ))
                }
            }

            // 잠금 상태에서 현재 최고가 조회
            let highest: Option<i64> = sqlx::query(queries::GET_HIGHEST_BID)
                .bind(cmd.item_id)
                .fetch_one(&mut **tx)
                .await?
                .get("highest_bid");

            let current_bid = highest.unwrap_or(starting_bid);
            let accepted = match highest {
                Some(max) => cmd.amount > max,
                None => cmd.amount >= starting_bid,
            };
            if !accepted {
                warn!(
                    "{:<12} --> 현재 최고가 이하 입찰 거부 item_id: {}",
                    "Command", cmd.item_id
                );
                return Err(AppError::conflict_with(
                    "LOW_BID",
                    "Bid must be higher than the current bid",
                    serde_json::json!({
                        "current_bid": current_bid,
                        "bid_amount": cmd.amount,
                    }),
                ));
            }

            let bid = sqlx::query_as::<_, Bid>(queries::INSERT_BID)
                .bind(cmd.item_id)
                .bind(bidder_id)
                .bind(cmd.amount)
                .fetch_one(&mut **tx)
                .await?;
            Ok(bid)
        })
    })
    .await
}

// endregion: --- Commands
