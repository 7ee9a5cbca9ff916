//! ResourceService over the backend REST API

use super::ApiResponse;
use crate::config::ApiConfig;
use crate::core::{Record, ResourceService, error::ApiError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;

/// HTTP-backed record service
///
/// One instance per resource; clones share the underlying connection pool.
pub struct HttpService<T: Record> {
    client: Client,
    base_url: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> HttpService<T> {
    /// Build a service with its own client, applying the configured timeout
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Reuse an existing client (and its connection pool)
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            _record: PhantomData,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::resource_name())
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, T::resource_name(), id)
    }

    /// Send a request and decode the envelope
    ///
    /// `id` is set for item endpoints so a 404 maps to [`ApiError::NotFound`].
    async fn send<D: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        id: Option<&str>,
    ) -> Result<ApiResponse<D>, ApiError> {
        let resource = T::resource_name();
        let response = request.send().await.map_err(|e| {
            tracing::warn!(resource, error = %e, "request failed");
            ApiError::Transport {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::Transport {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            tracing::warn!(resource, status = status.as_u16(), "backend returned an error status");
            return Err(status_error(resource, status, id, &body));
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            resource: resource.to_string(),
            message: e.to_string(),
        })
    }
}

impl<T: Record> Clone for HttpService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _record: PhantomData,
        }
    }
}

/// Map a non-2xx response, preferring the envelope's message over the raw body
fn status_error(resource: &str, status: StatusCode, id: Option<&str>, body: &[u8]) -> ApiError {
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return ApiError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        };
    }

    let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            (!text.is_empty()).then_some(text)
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    ApiError::Status {
        resource: resource.to_string(),
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl<T: Record> ResourceService<T> for HttpService<T> {
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        let records: Vec<T> = self
            .send(self.client.get(self.collection_url()), None)
            .await?
            .into_result(T::resource_name())?;
        tracing::debug!(resource = T::resource_name(), count = records.len(), "fetched records");
        Ok(records)
    }

    async fn get(&self, id: &str) -> Result<T, ApiError> {
        self.send(self.client.get(self.item_url(id)), Some(id))
            .await?
            .into_result(T::resource_name())
    }

    async fn create(&self, record: T) -> Result<T, ApiError> {
        self.send(self.client.post(self.collection_url()).json(&record), None)
            .await?
            .into_result(T::resource_name())
    }

    async fn update(&self, id: &str, record: T) -> Result<T, ApiError> {
        self.send(self.client.put(self.item_url(id)).json(&record), Some(id))
            .await?
            .into_result(T::resource_name())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(self.client.delete(self.item_url(id)), Some(id))
            .await?
            .into_unit(T::resource_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Notice;

    #[test]
    fn test_urls() {
        let service: HttpService<Notice> =
            HttpService::with_client(Client::new(), "http://localhost:3000/api/");
        assert_eq!(service.base_url(), "http://localhost:3000/api");
        assert_eq!(service.collection_url(), "http://localhost:3000/api/notices");
        assert_eq!(service.item_url("n-1"), "http://localhost:3000/api/notices/n-1");
    }

    #[test]
    fn test_status_error_prefers_envelope_message() {
        let body = br#"{"success": false, "message": "Tenant access denied"}"#;
        let err = status_error("payments", StatusCode::FORBIDDEN, None, body);
        assert_eq!(
            err,
            ApiError::Status {
                resource: "payments".into(),
                status: 403,
                message: "Tenant access denied".into()
            }
        );
    }

    #[test]
    fn test_status_error_not_found_for_item() {
        let err = status_error("notices", StatusCode::NOT_FOUND, Some("n-9"), b"");
        assert!(matches!(err, ApiError::NotFound { id, .. } if id == "n-9"));
    }

    #[test]
    fn test_status_error_falls_back_to_reason() {
        let err = status_error("notices", StatusCode::BAD_GATEWAY, None, b"");
        assert_eq!(err.to_string(), "notices: HTTP 502: Bad Gateway");
    }
}
