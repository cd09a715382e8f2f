//! 제출 결과 응답 DTO

use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// 내용증명 제출 결과
///
/// # JSON 예제
///
/// ```json
/// { "success": true }
/// { "success": false, "error": "Invalid form data" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

impl From<&AppError> for SubmissionResult {
    fn from(err: &AppError) -> Self {
        Self::failed(err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_error_key() {
        let json = serde_json::to_value(SubmissionResult::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_failure_from_app_error() {
        let result = SubmissionResult::from(&AppError::DeliveryError("timeout".to_string()));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "Failed to send cease and desist letter"
            })
        );
    }
}
