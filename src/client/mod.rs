//! Backend API access
//!
//! Every endpoint of the portal backend answers with the same envelope:
//!
//! ```json
//! { "success": true, "data": [ ... ] }
//! { "success": false, "message": "Tenant not found" }
//! ```
//!
//! [`ApiResponse`] models that envelope and converts it into a typed result.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpService;

use crate::core::error::ApiError;
use serde::{Deserialize, Serialize};

/// Response envelope of the backend API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unwrap the payload, turning `success: false` into [`ApiError::Rejected`]
    pub fn into_result(self, resource: &str) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                resource: resource.to_string(),
                message: self
                    .message
                    .unwrap_or_else(|| "request was rejected".to_string()),
            });
        }

        self.data.ok_or_else(|| ApiError::MissingData {
            resource: resource.to_string(),
        })
    }

    /// Like [`into_result`](Self::into_result) for endpoints with no payload
    pub fn into_unit(self, resource: &str) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                resource: resource.to_string(),
                message: self
                    .message
                    .unwrap_or_else(|| "request was rejected".to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let response: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({"success": true, "data": [1, 2]})).unwrap();
        assert_eq!(response.into_result("payments").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_rejected_envelope_keeps_message() {
        let response: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({"success": false, "message": "Session expired"})).unwrap();
        let err = response.into_result("payments").unwrap_err();

        assert_eq!(
            err,
            ApiError::Rejected {
                resource: "payments".into(),
                message: "Session expired".into()
            }
        );
    }

    #[test]
    fn test_missing_data() {
        let response: ApiResponse<Vec<u32>> = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(
            response.into_result("notices").unwrap_err().error_code(),
            "API_MISSING_DATA"
        );
    }

    #[test]
    fn test_unit_envelope() {
        let ok: ApiResponse<serde_json::Value> = ApiResponse {
            success: true,
            data: None,
            message: Some("Deleted".into()),
        };
        assert!(ok.into_unit("notices").is_ok());
        assert!(ApiResponse::<()>::failure("nope").into_unit("notices").is_err());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Slip {
        number: u32,
    }

    #[test]
    fn test_payload_type_needs_no_default() {
        let response: ApiResponse<Slip> =
            serde_json::from_value(json!({"success": false, "message": "Spot taken"})).unwrap();
        assert_eq!(response.data, None);

        let response: ApiResponse<Slip> =
            serde_json::from_value(json!({"success": true, "data": {"number": 12}})).unwrap();
        assert_eq!(response.into_result("spots").unwrap(), Slip { number: 12 });
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let json = serde_json::to_value(ApiResponse::ok(7)).unwrap();
        assert_eq!(json, json!({"success": true, "data": 7}));
    }
}
