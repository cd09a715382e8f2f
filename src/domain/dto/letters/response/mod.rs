//! 내용증명 응답 DTO 모듈

pub mod submission_result;

pub use submission_result::SubmissionResult;
