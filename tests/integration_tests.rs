use bidwell_service::auth;
use bidwell_service::config::AppConfig;
use bidwell_service::database::DatabaseManager;
use bidwell_service::query;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use sqlx::Row;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

const BASE_URL: &str = "http://localhost:3000";

/// 트레이싱 초기화
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// 데이터베이스 매니저 설정
async fn setup() -> Arc<DatabaseManager> {
    let config = AppConfig::from_env().expect("DATABASE_URL and JWT_SECRET must be set");
    Arc::new(
        DatabaseManager::new(&config)
            .await
            .expect("Failed to create pool"),
    )
}

/// 세션 쿠키를 유지하는 클라이언트 생성
fn client_with_cookies() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client")
}

/// 테스트별 고유 이메일 생성
fn unique_email(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}+{}@test.local", prefix, nanos)
}

/// 테스트용 단체 + 진행 중 경매 생성
async fn create_test_auction(db_manager: &DatabaseManager, name: &str) -> i64 {
    let name = name.to_string();
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let org = sqlx::query(
                    "INSERT INTO organizations (name) VALUES ($1) RETURNING id",
                )
                .bind(format!("{} 단체", name))
                .fetch_one(&mut **tx)
                .await?;
                let org_id: i64 = org.get("id");

                let auction = sqlx::query(
                    "INSERT INTO auctions (org_id, name, ends_at, status)
                     VALUES ($1, $2, now() + interval '2 hours', 'active')
                     RETURNING id",
                )
                .bind(org_id)
                .bind(&name)
                .fetch_one(&mut **tx)
                .await?;
                Ok::<i64, sqlx::Error>(auction.get("id"))
            })
        })
        .await
        .unwrap()
}

/// 테스트용 상품 생성
async fn create_test_item(
    db_manager: &DatabaseManager,
    auction_id: i64,
    title: &str,
    starting_bid: i64,
) -> i64 {
    let title = title.to_string();
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let row = sqlx::query(
                    "INSERT INTO auction_items (auction_id, title, description, starting_bid)
                     VALUES ($1, $2, $3, $4)
                     RETURNING id",
                )
                .bind(auction_id)
                .bind(&title)
                .bind("통합 테스트를 위한 상품입니다.")
                .bind(starting_bid)
                .fetch_one(&mut **tx)
                .await?;
                Ok::<i64, sqlx::Error>(row.get("id"))
            })
        })
        .await
        .unwrap()
}

/// 회원 가입 후 세션 쿠키를 보유한 클라이언트 반환
async fn signup_bidder(prefix: &str) -> (Client, String) {
    let client = client_with_cookies();
    let email = unique_email(prefix);
    let response = client
        .post(format!("{}/api/auth/signup", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "s3cret-pass",
            "firstName": "Test",
            "lastName": "Bidder"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    (client, email)
}

/// 관리자 계정 생성 후 로그인된 클라이언트와 소속 단체 id 반환
async fn create_admin(db_manager: &DatabaseManager) -> (Client, i64) {
    let email = unique_email("admin");
    let password_hash = auth::hash_password("s3cret-pass").unwrap();
    let org_name = format!("관리자 테스트 단체 {}", email);

    let email_for_insert = email.clone();
    let org_id: i64 = db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let org = sqlx::query("INSERT INTO organizations (name) VALUES ($1) RETURNING id")
                    .bind(&org_name)
                    .fetch_one(&mut **tx)
                    .await?;
                let org_id: i64 = org.get("id");

                sqlx::query(
                    "INSERT INTO users (email, first_name, last_name, password_hash, role, org_id)
                     VALUES ($1, 'Admin', 'User', $2, 'admin', $3)",
                )
                .bind(&email_for_insert)
                .bind(&password_hash)
                .bind(org_id)
                .execute(&mut **tx)
                .await?;
                Ok::<i64, sqlx::Error>(org_id)
            })
        })
        .await
        .unwrap();

    let client = client_with_cookies();
    let response = client
        .post(format!("{}/api/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "s3cret-pass" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    (client, org_id)
}

/// 입찰이 없는 상품은 현재 입찰가가 시작가와 같아야 한다
#[tokio::test]
async fn test_projection_without_bids() {
    let db_manager = setup().await;
    let auction_id = create_test_auction(&db_manager, "입찰 없는 상품 테스트").await;
    let item_id = create_test_item(&db_manager, auction_id, "입찰 없는 상품", 5000).await;

    let item = query::handlers::get_item(&db_manager, item_id).await.unwrap();
    assert_eq!(item.current_bid, 5000);
    assert_eq!(item.bids_count, 0);
}

/// 입찰 테스트: 시작가 5000, 5500 입찰 -> 현재 입찰가 5500, 입찰 수 1
#[tokio::test]
async fn test_place_bid() {
    let db_manager = setup().await;
    let auction_id = create_test_auction(&db_manager, "입찰 테스트").await;
    let item_id = create_test_item(&db_manager, auction_id, "입찰 테스트 상품", 5000).await;
    let (client, _) = signup_bidder("bidder").await;

    let response = client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 5500 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["current_bid"], 5500);
    assert_eq!(body["bids_count"], 1);

    // 데이터베이스에서 파생 값 재확인
    let item = query::handlers::get_item(&db_manager, item_id).await.unwrap();
    assert_eq!(item.current_bid, 5500);
    assert_eq!(item.bids_count, 1);
}

/// 현재 최고가 이하 입찰은 거부되고 이력에도 남지 않아야 한다
#[tokio::test]
async fn test_low_bid_rejected() {
    let db_manager = setup().await;
    let auction_id = create_test_auction(&db_manager, "하향 입찰 거부 테스트").await;
    let item_id = create_test_item(&db_manager, auction_id, "하향 입찰 거부 상품", 5000).await;
    let (client, _) = signup_bidder("lowbidder").await;

    // 첫 입찰 5500
    let response = client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 5500 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // 하향 입찰 5200 -> 409 LOW_BID
    let response = client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 5200 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "LOW_BID");
    assert_eq!(body["detail"]["current_bid"], 5500);

    // 현재 입찰가와 입찰 수 모두 그대로여야 한다
    let item = query::handlers::get_item(&db_manager, item_id).await.unwrap();
    assert_eq!(item.current_bid, 5500);
    assert_eq!(item.bids_count, 1);
}

/// 첫 입찰은 시작가와 같은 금액도 수락되어야 한다 (시작가 = 최소 입찰 가능 금액)
#[tokio::test]
async fn test_first_bid_at_starting_amount() {
    let db_manager = setup().await;
    let auction_id = create_test_auction(&db_manager, "시작가 입찰 테스트").await;
    let item_id = create_test_item(&db_manager, auction_id, "시작가 입찰 상품", 60000).await;
    let (client, _) = signup_bidder("starter").await;

    let response = client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 60000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let item = query::handlers::get_item(&db_manager, item_id).await.unwrap();
    assert_eq!(item.current_bid, 60000);
    assert_eq!(item.bids_count, 1);
}

/// 세션 없이 입찰하면 401이어야 한다
#[tokio::test]
async fn test_bid_requires_session() {
    let db_manager = setup().await;
    let auction_id = create_test_auction(&db_manager, "미인증 입찰 테스트").await;
    let item_id = create_test_item(&db_manager, auction_id, "미인증 입찰 상품", 1000).await;

    let client = Client::new();
    let response = client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 2000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// 로그인 흐름 테스트: 잘못된 비밀번호는 쿠키 없이 401, 정상 로그인은 동일한 사용자로 인증
#[tokio::test]
async fn test_login_flow() {
    let (_, email) = signup_bidder("login").await;

    // 잘못된 비밀번호 -> 401, Set-Cookie 없음
    let bare_client = Client::new();
    let response = bare_client
        .post(format!("{}/api/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "wrong-pass" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get("set-cookie").is_none());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid email or password");

    // 정상 로그인 -> 세션 쿠키 발급
    let client = client_with_cookies();
    let response = client
        .post(format!("{}/api/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "s3cret-pass" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let login_body: Value = response.json().await.unwrap();
    let user_id = login_body["user"]["id"].as_i64().unwrap();

    // 세션 쿠키로 본인 조회
    let response = client
        .get(format!("{}/api/auth/me", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let me_body: Value = response.json().await.unwrap();
    assert_eq!(me_body["user"]["id"].as_i64().unwrap(), user_id);
    assert_eq!(me_body["user"]["role"], "bidder");
}

/// 중복 이메일 가입은 409이고 사용자 행이 추가로 생기지 않아야 한다
#[tokio::test]
async fn test_duplicate_signup_rejected() {
    let db_manager = setup().await;
    let (_, email) = signup_bidder("dup").await;

    let client = Client::new();
    let response = client
        .post(format!("{}/api/auth/signup", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "other-pass",
            "firstName": "Other",
            "lastName": "Person"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Email already registered");

    // 사용자 행은 1개만 존재해야 한다
    let email_for_count = email.clone();
    let count: i64 = db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let row = sqlx::query("SELECT COUNT(*) AS cnt FROM users WHERE email = $1")
                    .bind(&email_for_count)
                    .fetch_one(&mut **tx)
                    .await?;
                Ok::<i64, sqlx::Error>(row.get("cnt"))
            })
        })
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// 필수 필드 누락 시 400이어야 한다
#[tokio::test]
async fn test_login_missing_fields() {
    let client = Client::new();
    let response = client
        .post(format!("{}/api/auth/login", BASE_URL))
        .json(&json!({ "email": "someone@test.local" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Email and password are required");
}

/// 세션 없이 관리자 라우트 접근 시 로그인 페이지로 리다이렉트되어야 한다
#[tokio::test]
async fn test_admin_redirect_without_session() {
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let response = client
        .get(format!("{}/admin/auctions-dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get("location").unwrap().to_str().unwrap(),
        "/login"
    );
}

/// 동시성 입찰 테스트: 모든 요청은 성공 또는 LOW_BID로 끝나고
/// 최종 현재 입찰가는 시도된 최고 금액이어야 한다
#[tokio::test]
async fn test_concurrent_bidding() {
    // 테스트 시작 시 tracing 초기화
    init_tracing();

    let db_manager = setup().await;
    let auction_id = create_test_auction(&db_manager, "동시성 입찰 테스트").await;
    let item_id = create_test_item(&db_manager, auction_id, "동시성 입찰 상품", 10000).await;
    let (client, _) = signup_bidder("racer").await;

    // 50개의 동시 입찰 생성
    let mut handles = vec![];
    for i in 1..=50i64 {
        let client = client.clone();
        let bid_amount = 10000 + i * 1000;

        let handle = tokio::spawn(async move {
            let response = client
                .post(format!("{}/bid", BASE_URL))
                .json(&json!({ "item_id": item_id, "amount": bid_amount }))
                .send()
                .await
                .unwrap();

            let status = response.status();
            let body = response.text().await.unwrap();
            (status, body)
        });

        handles.push(handle);
    }

    // 모든 입찰 처리 대기 및 결과 확인
    let mut successful_bids = 0;
    let mut rejected_bids = 0;
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        if status == StatusCode::OK {
            successful_bids += 1;
        } else if status == StatusCode::CONFLICT {
            let error_info: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(error_info["code"], "LOW_BID");
            rejected_bids += 1;
        } else {
            panic!("예상하지 못한 응답 상태: {} body: {}", status, body);
        }
    }

    info!(
        "성공한 입찰 수: {}, 거부된 입찰 수: {}",
        successful_bids, rejected_bids
    );
    assert!(successful_bids >= 1);
    assert_eq!(successful_bids + rejected_bids, 50);

    // 최고 금액 입찰은 어떤 순서로 처리되어도 수락된다
    let item = query::handlers::get_item(&db_manager, item_id).await.unwrap();
    assert_eq!(item.current_bid, 60000);
    assert_eq!(item.bids_count, successful_bids);
}

/// 종료된 경매에 대한 입찰은 거부되어야 한다
#[tokio::test]
async fn test_bid_after_auction_end() {
    let db_manager = setup().await;

    // 이미 종료 시각이 지난 active 경매 생성
    let auction_id = db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let org = sqlx::query("INSERT INTO organizations (name) VALUES ('종료 테스트 단체') RETURNING id")
                    .fetch_one(&mut **tx)
                    .await?;
                let org_id: i64 = org.get("id");
                let auction = sqlx::query(
                    "INSERT INTO auctions (org_id, name, ends_at, status)
                     VALUES ($1, '종료된 경매', now() - interval '1 minute', 'active')
                     RETURNING id",
                )
                .bind(org_id)
                .fetch_one(&mut **tx)
                .await?;
                Ok::<i64, sqlx::Error>(auction.get("id"))
            })
        })
        .await
        .unwrap();
    let item_id = create_test_item(&db_manager, auction_id, "종료된 경매 상품", 3000).await;
    let (client, _) = signup_bidder("late").await;

    let response = client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 9000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "ALREADY_ENDED");
}

/// 관리자 카탈로그 흐름 테스트:
/// 경매 생성(draft) -> 상품 등록 -> draft 입찰 거부 -> 개시 -> 입찰 수락 -> 재개시 거부
#[tokio::test]
async fn test_admin_catalog_flow() {
    let db_manager = setup().await;
    let (admin_client, _org_id) = create_admin(&db_manager).await;

    // 경매 생성 -> 201, draft 상태
    let ends_at = (Utc::now() + Duration::hours(2)).to_rfc3339();
    let response = admin_client
        .post(format!("{}/admin/auctions", BASE_URL))
        .json(&json!({
            "name": "관리자 흐름 테스트 경매",
            "description": "관리자 흐름 통합 테스트",
            "ends_at": ends_at
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let auction: Value = response.json().await.unwrap();
    assert_eq!(auction["status"], "draft");
    let auction_id = auction["id"].as_i64().unwrap();

    // 상품 등록 -> 201
    let response = admin_client
        .post(format!("{}/admin/auctions/{}/items", BASE_URL, auction_id))
        .json(&json!({ "title": "관리자 등록 상품", "starting_bid": 4000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let item: Value = response.json().await.unwrap();
    let item_id = item["id"].as_i64().unwrap();

    // draft 경매 상품에 대한 입찰 -> 409 NOT_ACTIVE
    let (bidder_client, _) = signup_bidder("draftbid").await;
    let response = bidder_client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 4500 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "NOT_ACTIVE");

    // 경매 개시 -> active 상태
    let response = admin_client
        .post(format!("{}/admin/auctions/{}/activate", BASE_URL, auction_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let activated: Value = response.json().await.unwrap();
    assert_eq!(activated["status"], "active");

    // 개시 이후에는 입찰이 수락된다
    let response = bidder_client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 4500 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // 이미 개시된 경매 재개시 -> 409 INVALID_STATUS
    let response = admin_client
        .post(format!("{}/admin/auctions/{}/activate", BASE_URL, auction_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_STATUS");

    // 다른 단체의 경매에 상품 등록 -> 404
    let other_auction_id = create_test_auction(&db_manager, "다른 단체 경매").await;
    let response = admin_client
        .post(format!(
            "{}/admin/auctions/{}/items",
            BASE_URL, other_auction_id
        ))
        .json(&json!({ "title": "남의 경매 상품", "starting_bid": 1000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// 대시보드 통계 테스트: draft 경매의 상품은 모금액 합계에서 제외된다
#[tokio::test]
async fn test_admin_dashboard_stats() {
    let db_manager = setup().await;
    let (admin_client, _org_id) = create_admin(&db_manager).await;
    let ends_at = (Utc::now() + Duration::hours(2)).to_rfc3339();

    // 진행 중 경매: 상품 1개, 입찰 1건 (7000)
    let response = admin_client
        .post(format!("{}/admin/auctions", BASE_URL))
        .json(&json!({ "name": "대시보드 진행 경매", "ends_at": ends_at }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let active_auction: Value = response.json().await.unwrap();
    let active_auction_id = active_auction["id"].as_i64().unwrap();

    let response = admin_client
        .post(format!(
            "{}/admin/auctions/{}/items",
            BASE_URL, active_auction_id
        ))
        .json(&json!({ "title": "대시보드 진행 상품", "starting_bid": 5000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let item: Value = response.json().await.unwrap();
    let item_id = item["id"].as_i64().unwrap();

    let response = admin_client
        .post(format!(
            "{}/admin/auctions/{}/activate",
            BASE_URL, active_auction_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let (bidder_client, _) = signup_bidder("dashbid").await;
    let response = bidder_client
        .post(format!("{}/bid", BASE_URL))
        .json(&json!({ "item_id": item_id, "amount": 7000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // draft 경매: 상품 1개, 입찰 없음 (시작가 3000은 모금액에 포함되면 안 된다)
    let response = admin_client
        .post(format!("{}/admin/auctions", BASE_URL))
        .json(&json!({ "name": "대시보드 준비 경매", "ends_at": ends_at }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let draft_auction: Value = response.json().await.unwrap();
    let draft_auction_id = draft_auction["id"].as_i64().unwrap();

    let response = admin_client
        .post(format!(
            "{}/admin/auctions/{}/items",
            BASE_URL, draft_auction_id
        ))
        .json(&json!({ "title": "대시보드 준비 상품", "starting_bid": 3000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    // 대시보드 조회: 모금액은 진행 경매 상품의 현재 입찰가 합계여야 한다
    let response = admin_client
        .get(format!("{}/admin/auctions-dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let dashboard: Value = response.json().await.unwrap();
    assert_eq!(dashboard["stats"]["total_raised"], 7000);
    assert_eq!(dashboard["stats"]["total_bids"], 1);
    assert_eq!(dashboard["stats"]["active_auctions"], 1);
    assert_eq!(dashboard["auctions"].as_array().unwrap().len(), 2);
}

/// 경매 목록/상세 조회 테스트
#[tokio::test]
async fn test_auction_catalog_reads() {
    let db_manager = setup().await;
    let auction_id = create_test_auction(&db_manager, "카탈로그 조회 테스트").await;
    let item_id = create_test_item(&db_manager, auction_id, "카탈로그 상품", 2500).await;

    let client = Client::new();

    // 경매 목록에 포함되어야 한다
    let response = client
        .get(format!("{}/auctions", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let auctions: Value = response.json().await.unwrap();
    assert!(auctions
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["id"].as_i64() == Some(auction_id)));

    // 경매 상세에 상품 파생 값이 포함되어야 한다
    let response = client
        .get(format!("{}/auctions/{}", BASE_URL, auction_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let detail: Value = response.json().await.unwrap();
    let items = detail["items"].as_array().unwrap();
    let item = items
        .iter()
        .find(|i| i["id"].as_i64() == Some(item_id))
        .unwrap();
    assert_eq!(item["current_bid"], 2500);
    assert_eq!(item["bids_count"], 0);
}
