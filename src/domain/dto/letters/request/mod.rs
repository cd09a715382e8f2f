//! # 내용증명 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 폼/JSON 데이터를 구조화된 Rust 타입으로 역직렬화하고
//! `validator` 크레이트로 스키마 규칙을 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON/폼 구조와 문자열 타입 일치성 (`serde`)
//! 2. **형식 검증**: 필수 여부, 최소 길이, 이메일 형식 (`validator`)
//! 3. **변환**: 검증된 값으로 불변 `LetterRequest` 생성
//!
//! 검증 실패 시 `AppError::ValidationError`가 발생하며,
//! 이는 HTTP 400 Bad Request와 고정 메시지 `Invalid form data`로 변환됩니다.

pub mod letter_form;

pub use letter_form::LetterForm;
