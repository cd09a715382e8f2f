//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 내용증명 제출 처리와 발송 채널을 담당합니다.
//!
//! # Features
//!
//! - 폼 페이로드 검증 및 내용증명 본문 생성
//! - 이메일 발송 (항상) 및 내용증명 우편 발송 (선택)
//! - 발송 채널 trait 주입으로 테스트 대역 교체 가능
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{
//!     delivery::{LoggingEmailSender, LoggingMailSender},
//!     letters::LetterService,
//! };
//!
//! let service = LetterService::new(Arc::new(LoggingEmailSender), Arc::new(LoggingMailSender));
//! ```

pub mod letters;
pub mod delivery;
