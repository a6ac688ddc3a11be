//! reqwest client for `POST /product/generate-docs`
//!
//! The response is checked in a fixed order: HTTP status, then empty body,
//! then JSON shape, then the envelope's business `code`. Each stage fails with
//! its own `ApiError` variant.

use super::error::ApiError;
use crate::state::{GenerateRequest, GenerateResponse, GeneratedDocument};
use anyhow::Result;
use reqwest::StatusCode;
use std::time::Duration;

/// Route appended to the configured base URL
pub const GENERATE_DOCS_PATH: &str = "/product/generate-docs";

/// Client for the document-generation backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client; `base_url` must already be normalized (no trailing slash)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the generate route
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_DOCS_PATH)
    }

    /// Send the request and decode the generated document
    pub async fn generate_document(
        &self,
        request: &GenerateRequest,
    ) -> Result<GeneratedDocument, ApiError> {
        let url = self.endpoint();
        tracing::info!(
            %url,
            language = request.language.map(|l| l.tag()).unwrap_or("-"),
            "Sending generate-docs request"
        );

        // `.json` also sets `Content-Type: application/json`
        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Generate-docs response received");

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        interpret_response(status, &body)
    }
}

/// Turn a status and raw body into a document or a typed failure
pub fn interpret_response(status: StatusCode, body: &str) -> Result<GeneratedDocument, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
        });
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        tracing::warn!("Backend returned an empty body");
        return Err(ApiError::EmptyBody);
    }

    let envelope: GenerateResponse = serde_json::from_str(trimmed).map_err(|e| {
        tracing::warn!("Failed to parse generate-docs body: {e}");
        ApiError::from(e)
    })?;

    match envelope {
        GenerateResponse {
            code: 200,
            data: Some(document),
            ..
        } => Ok(document),
        GenerateResponse { code, message, .. } => {
            tracing::warn!(code, %message, "Backend rejected generate-docs request");
            Err(ApiError::Business { code, message })
        }
    }
}
