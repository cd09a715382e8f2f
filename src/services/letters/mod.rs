//! 내용증명 제출 서비스 모듈
//!
//! # Features
//!
//! - 스키마 검증 (`LetterForm` → `LetterRequest`)
//! - 고정 평문 템플릿 치환
//! - 이메일 → (선택) 우편 순차 발송
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::letters::LetterService;
//!
//! let result = letter_service.submit(form).await;
//! ```

pub mod letter_service;
pub mod letter_template;

pub use letter_service::LetterService;
pub use letter_template::{render_letter, LETTER_SUBJECT};
