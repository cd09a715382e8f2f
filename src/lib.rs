//! 내용증명 발송 서비스 백엔드
//!
//! 내용증명(cease-and-desist letter) 작성 폼을 제공하고, 입력을 검증한 뒤
//! 평문 서신을 만들어 이메일과 (선택적으로) 내용증명 우편으로 발송합니다.
//!
//! # Features
//!
//! - **작성 폼**: 서버 렌더링 HTML 폼과 제출 상태 관리
//! - **입력 검증**: `validator` 기반 스키마 검증
//! - **서신 생성**: 고정 평문 템플릿 치환
//! - **발송**: 이메일 → 내용증명 우편 순차 발송 (trait 주입)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 폼 화면 / JSON API / 헬스체크
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, Form Presenter
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  LetterService  │ ← 검증, 서신 생성, 발송 순서 제어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Email / Mail    │ ← 발송 채널 (로그 기반 기본 구현)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cease_desist_backend::services::delivery::{LoggingEmailSender, LoggingMailSender};
//! use cease_desist_backend::services::letters::LetterService;
//!
//! let service = LetterService::new(Arc::new(LoggingEmailSender), Arc::new(LoggingMailSender));
//! let result = service.submit(form).await;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod presenter;
pub mod utils;
pub mod routes;
pub mod handlers;
