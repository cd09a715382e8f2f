//! 내용증명 제출 관련 DTO
//!
//! - [`request`] - 폼 페이로드 (`LetterForm`)
//! - [`response`] - 제출 결과 (`SubmissionResult`)

pub mod request;
pub mod response;
