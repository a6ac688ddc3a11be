//! Trait abstraction for the backend client to enable mocking in tests

use super::client::ApiClient;
use super::error::ApiError;
use crate::state::{GenerateRequest, GeneratedDocument};
use async_trait::async_trait;

/// Backend operations used by the wizard
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocsApi: Send + Sync {
    /// Generate the export document for a completed form
    async fn generate_document(
        &self,
        request: &GenerateRequest,
    ) -> Result<GeneratedDocument, ApiError>;
}

#[async_trait]
impl DocsApi for ApiClient {
    async fn generate_document(
        &self,
        request: &GenerateRequest,
    ) -> Result<GeneratedDocument, ApiError> {
        ApiClient::generate_document(self, request).await
    }
}
