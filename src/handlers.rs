// region:    --- Imports
use crate::auth::{self, Claims, LoginRequest, SignupRequest};
use crate::bidding::commands::{handle_place_bid, PlaceBidCommand};
use crate::bidding::model::BidEntry;
use crate::catalog::commands::{self, AddItemCommand, CreateAuctionCommand};
use crate::catalog::model::{CurrentUser, ItemListing};
use crate::error::AppError;
use crate::query;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::{Extension, Json};
use std::collections::{HashMap, HashSet};
use tracing::info;

// endregion: --- Imports

// region:    --- Auth Handlers

/// 회원 가입 요청 처리
pub async fn handle_signup(
    State((db_manager, config)): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("{:<12} --> 회원 가입 요청 처리: {}", "Auth", req.email);
    let (user, token) = auth::signup(&db_manager, &config.jwt_secret, req).await?;
    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, auth::session_cookie(&token))],
        Json(serde_json::json!({ "success": true, "user": user })),
    ))
}

/// 로그인 요청 처리
pub async fn handle_login(
    State((db_manager, config)): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("{:<12} --> 로그인 요청 처리: {}", "Auth", req.email);
    let (user, token) = auth::login(&db_manager, &config.jwt_secret, req).await?;
    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, auth::session_cookie(&token))],
        Json(serde_json::json!({ "success": true, "user": user })),
    ))
}

/// 로그아웃 요청 처리 (세션 쿠키 제거)
pub async fn handle_logout() -> impl IntoResponse {
    info!("{:<12} --> 로그아웃 요청 처리", "Auth");
    (
        [(header::SET_COOKIE, auth::expired_cookie())],
        Json(serde_json::json!({ "success": true })),
    )
}

/// 현재 사용자 조회
pub async fn handle_me(
    State((db_manager, config)): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(auth::token_from_cookie_header)
        .and_then(|token| auth::verify_token(&config.jwt_secret, token).ok())
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

    let user = query::handlers::get_user_by_id(&db_manager, claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "user": CurrentUser::from(user),
    })))
}

/// 로그인 안내 페이지 (보호 라우트 리다이렉트 대상)
pub async fn handle_login_page() -> impl IntoResponse {
    Html(
        "<!doctype html><html><head><title>BidWell - Sign in</title></head>\
         <body><h1>Sign in</h1>\
         <p>POST /api/auth/login with email and password to receive a session cookie.</p>\
         </body></html>",
    )
}

// endregion: --- Auth Handlers

// region:    --- Command Handlers

/// 입찰 요청 처리 (세션 필수, 입찰자는 세션에서 결정)
pub async fn handle_bid(
    State((db_manager, _)): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(cmd): Json<PlaceBidCommand>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

    let item_id = cmd.item_id;
    let bid_amount = cmd.amount;

    // 입찰 처리 (최고가 검증 + 삽입, 단일 트랜잭션)
    handle_place_bid(&db_manager, claims.sub, cmd).await?;

    // 갱신된 상품 조회 후 응답
    let updated_item = query::handlers::get_item(&db_manager, item_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Bid placed successfully",
        "current_bid": updated_item.current_bid,
        "bids_count": updated_item.bids_count,
        "bid_amount": bid_amount,
    })))
}

/// 경매 생성 요청 처리 (관리자)
pub async fn handle_create_auction(
    State((db_manager, _)): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(cmd): Json<CreateAuctionCommand>,
) -> Result<impl IntoResponse, AppError> {
    let org_id = require_org(&claims)?;
    let auction = commands::create_auction(&db_manager, org_id, cmd).await?;
    Ok((StatusCode::CREATED, Json(auction)))
}

/// 상품 등록 요청 처리 (관리자)
pub async fn handle_add_item(
    State((db_manager, _)): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(auction_id): Path<i64>,
    Json(cmd): Json<AddItemCommand>,
) -> Result<impl IntoResponse, AppError> {
    let org_id = require_org(&claims)?;
    let item = commands::add_item(&db_manager, org_id, auction_id, cmd).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// 경매 개시 요청 처리 (관리자)
pub async fn handle_activate_auction(
    State((db_manager, _)): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(auction_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let org_id = require_org(&claims)?;
    let auction = commands::activate_auction(&db_manager, org_id, auction_id).await?;
    Ok(Json(auction))
}

/// 관리자 클레임에서 소속 단체 id 추출
fn require_org(claims: &Claims) -> Result<i64, AppError> {
    claims
        .org_id
        .ok_or_else(|| AppError::Unauthorized("Admin account has no organization".to_string()))
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 진행 중인 경매 목록 조회
pub async fn handle_list_auctions(
    State((db_manager, _)): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    info!("{:<12} --> 경매 목록 조회", "HandlerQuery");
    let auctions = query::handlers::get_active_auctions(&db_manager).await?;
    Ok(Json(auctions))
}

/// 경매 상세 조회 (단체, 상품 목록 포함)
pub async fn handle_get_auction(
    State((db_manager, _)): State<AppState>,
    Path(auction_id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!("{:<12} --> 경매 상세 조회 id: {}", "HandlerQuery", auction_id);
    let auction = query::handlers::get_auction(&db_manager, auction_id).await?;
    let organization = query::handlers::get_organization(&db_manager, auction.org_id).await?;
    let items = query::handlers::get_auction_items(&db_manager, auction_id).await?;
    Ok(Json(serde_json::json!({
        "auction": auction,
        "organization": organization,
        "items": items,
    })))
}

/// 상품 조회
pub async fn handle_get_item(
    State((db_manager, _)): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    info!("{:<12} --> 상품 조회 id: {}", "HandlerQuery", item_id);
    let item = query::handlers::get_item(&db_manager, item_id).await?;
    Ok(Json(item))
}

/// 상품 입찰 이력 조회
pub async fn handle_get_item_bids(
    State((db_manager, _)): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "{:<12} --> 상품 입찰 이력 조회 id: {}",
        "HandlerQuery", item_id
    );
    let bids = query::handlers::get_item_bids(&db_manager, item_id).await?;
    Ok(Json(bids))
}

/// 관리자 대시보드 조회
/// 단체의 경매/상품/입찰 이력과 요약 통계를 한 번에 내려준다.
pub async fn handle_dashboard(
    State((db_manager, _)): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<serde_json::Value>, AppError> {
    let org_id = require_org(&claims)?;
    info!("{:<12} --> 대시보드 조회 org_id: {}", "HandlerQuery", org_id);

    let org = query::handlers::get_organization(&db_manager, org_id).await?;
    let auctions = query::handlers::get_auctions_by_org(&db_manager, org_id).await?;
    let items = query::handlers::get_org_items(&db_manager, org_id).await?;
    let bids = query::handlers::get_org_bids(&db_manager, org_id).await?;

    // 요약 통계: draft 경매의 상품은 모금액 합계에서 제외한다
    let non_draft_auctions: HashSet<i64> = auctions
        .iter()
        .filter(|a| a.status != "draft")
        .map(|a| a.id)
        .collect();
    let total_raised: i64 = items
        .iter()
        .filter(|i| non_draft_auctions.contains(&i.auction_id))
        .map(|i| i.current_bid)
        .sum();
    let total_bids: i64 = items.iter().map(|i| i.bids_count).sum();
    let active_auctions = auctions.iter().filter(|a| a.status == "active").count();

    let mut items_by_auction: HashMap<i64, Vec<ItemListing>> = HashMap::new();
    for item in items {
        items_by_auction.entry(item.auction_id).or_default().push(item);
    }
    let mut bids_by_item: HashMap<i64, Vec<BidEntry>> = HashMap::new();
    for bid in bids {
        bids_by_item.entry(bid.item_id).or_default().push(bid);
    }

    Ok(Json(serde_json::json!({
        "org": org,
        "auctions": auctions,
        "items_by_auction": items_by_auction,
        "bids_by_item": bids_by_item,
        "stats": {
            "total_raised": total_raised,
            "total_bids": total_bids,
            "active_auctions": active_auctions,
        },
    })))
}

// endregion: --- Query Handlers
