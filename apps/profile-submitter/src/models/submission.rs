use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SubmitError;

/// Arbitrary user-supplied profile fields. Insertion order is preserved.
pub type Profile = Map<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub user_id: String,
    pub profile: Profile,
    pub resume_file_url: Option<String>,
    pub resume_file_name: Option<String>,
    pub endpoint: String,
}

impl SubmissionRequest {
    pub fn new(user_id: impl Into<String>, profile: Profile, endpoint: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            profile,
            resume_file_url: None,
            resume_file_name: None,
            endpoint: endpoint.into(),
        }
    }

    pub fn with_resume(mut self, url: impl Into<String>, file_name: impl Into<String>) -> Self {
        self.resume_file_url = Some(url.into());
        self.resume_file_name = Some(file_name.into());
        self
    }
}

/// Uniform outcome handed back to every caller. Branch on `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn ok(status_code: u16, data: Value) -> Self {
        Self {
            success: true,
            status_code,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Flattens an internal outcome into the caller-facing shape.
    pub fn from_outcome(outcome: Result<(u16, Value), SubmitError>) -> Self {
        match outcome {
            Ok((status, data)) => Self::ok(status, data),
            Err(e) => Self::failed(e.status_code(), e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_omits_data_when_serialized() {
        let result = SubmissionResult::failed(408, "Request timed out");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "status_code": 408, "error": "Request timed out"})
        );
    }

    #[test]
    fn test_success_omits_error_when_serialized() {
        let result = SubmissionResult::ok(200, json!({"id": 42}));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "status_code": 200, "data": {"id": 42}})
        );
    }

    #[test]
    fn test_from_outcome_uses_error_status() {
        let result = SubmissionResult::from_outcome(Err(SubmitError::NotFound));
        assert!(!result.success);
        assert_eq!(result.status_code, 404);
        assert_eq!(result.error.as_deref(), Some("User not found"));
        assert!(result.data.is_none());
    }

    #[test]
    fn test_with_resume_sets_both_fields() {
        let req = SubmissionRequest::new("u1", Profile::new(), "http://localhost/save")
            .with_resume("https://example.com/r.pdf", "r.pdf");
        assert_eq!(req.resume_file_url.as_deref(), Some("https://example.com/r.pdf"));
        assert_eq!(req.resume_file_name.as_deref(), Some("r.pdf"));
    }
}
