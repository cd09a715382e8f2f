//! # Domain Layer
//!
//! 내용증명 발송 서비스의 도메인 타입을 정의합니다.
//!
//! - [`dto`] - HTTP 요청/응답 데이터 전송 객체
//! - [`models`] - 검증이 끝난 도메인 모델
//!
//! 영구 저장되는 엔티티는 없습니다. 모든 객체는 한 번의 요청 동안만 존재합니다.

pub mod dto;
pub mod models;
