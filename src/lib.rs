pub mod auth;
pub mod bidding;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod query;
pub mod scheduler;

use std::sync::Arc;

/// 라우터 공유 상태: (데이터베이스 매니저, 서비스 설정)
pub type AppState = (Arc<database::DatabaseManager>, Arc<config::AppConfig>);
