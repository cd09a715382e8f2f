//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 검증 실패와 발송 실패 두 가지 에러 분류
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 자동 응답 변환
//! - **고정 메시지**: 클라이언트에는 필드별 상세 정보 없이 고정 문자열만 노출
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! #[post("")]
//! async fn submit_letter(
//!     service: web::Data<LetterService>,
//!     payload: web::Json<LetterForm>,
//! ) -> Result<HttpResponse, AppError> {
//!     service.send(payload.into_inner()).await?; // 자동 HTTP 응답 변환
//!     Ok(HttpResponse::Ok().json(SubmissionResult::ok()))
//! }
//! ```

pub mod errors;

pub use errors::*;
