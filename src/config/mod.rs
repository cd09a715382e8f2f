//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 값이 없거나 잘못된 경우 안전한 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 서버 바인딩, Rate Limiting, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env 파일 선택)
//! export PROFILE="dev"             # dev → .env.dev, prod → .env.prod
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="https://letters.example.com,https://admin.example.com"
//!
//! # 로깅
//! export RUST_LOG="info,actix_web=info"
//! ```
//!
//! 환경 변수는 서버 운영 설정일 뿐이며 내용증명 제출 규칙에는 영향을 주지 않습니다.

pub mod server_config;

pub use server_config::*;
