//! HTTP client for the document-generation backend

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use error::{ApiError, FailureNotice};
pub use traits::DocsApi;

#[cfg(test)]
pub use traits::MockDocsApi;
