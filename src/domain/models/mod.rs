//! # 도메인 모델
//!
//! 검증이 끝난 비즈니스 객체를 정의합니다.
//! DTO(`domain::dto`)가 외부 입력을 그대로 표현한다면,
//! 모델은 스키마 규칙을 모두 만족한 상태만 표현합니다.
//!
//! - [`letter_request::LetterRequest`] - 검증된 내용증명 요청 (불변, 요청 범위 수명)

pub mod letter_request;

pub use letter_request::LetterRequest;
