// region:    --- Imports
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use bidwell_service::config::AppConfig;
use bidwell_service::database::{self, DatabaseManager};
use bidwell_service::{auth, handlers, scheduler, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드 (세션 서명 비밀키 포함)
    let config = Arc::new(AppConfig::from_env()?);

    // DatabaseManager 생성
    let db_manager = Arc::new(DatabaseManager::new(&config).await?);

    // 데이터베이스 초기화
    if config.reset_database {
        db_manager.recreate_database().await?;
        info!("{:<12} --> 데이터베이스 재생성 완료", "Main");
    } else if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    // 데모 데이터 시딩
    if config.seed_demo_data {
        database::seed_demo_data(&db_manager).await?;
    }

    // 경매 종료 스케줄러 시작
    let auction_scheduler = scheduler::AuctionScheduler::new(db_manager.get_pool());
    auction_scheduler.start().await;

    // 라우터 공유 상태
    let state: AppState = (Arc::clone(&db_manager), Arc::clone(&config));

    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 관리자 라우터 (토큰 검증 실패 시 /login 리다이렉트)
    let routes_admin = Router::new()
        .route("/auctions-dashboard", get(handlers::handle_dashboard))
        .route("/auctions", post(handlers::handle_create_auction))
        .route("/auctions/:id/items", post(handlers::handle_add_item))
        .route(
            "/auctions/:id/activate",
            post(handlers::handle_activate_auction),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_admin,
        ));

    // 라우터 설정
    let routes_all = Router::new()
        .route("/api/auth/signup", post(handlers::handle_signup))
        .route("/api/auth/login", post(handlers::handle_login))
        .route("/api/auth/logout", post(handlers::handle_logout))
        .route("/api/auth/me", get(handlers::handle_me))
        .route("/auctions", get(handlers::handle_list_auctions))
        .route("/auctions/:id", get(handlers::handle_get_auction))
        .route("/items/:id", get(handlers::handle_get_item))
        .route("/items/:id/bids", get(handlers::handle_get_item_bids))
        .route(
            "/bid",
            post(handlers::handle_bid).layer(axum::middleware::from_fn_with_state(
                state.clone(),
                auth::middleware::require_session,
            )),
        )
        .route("/login", get(handlers::handle_login_page))
        .nest("/admin", routes_admin)
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024 * 2)) // 이미지 data URL 업로드 허용(2MB)
        .with_state(state);

    // 리스너 생성
    let listener = TcpListener::bind(config.server_addr()).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
