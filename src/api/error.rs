//! Failure kinds of a document-generation request

use crate::i18n::Translations;
use thiserror::Error;

/// Every way `generate_document` can fail, kept distinct for the caller
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect, timeout, body read)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server reachable but answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Server answered with an empty body or a bare `{}`
    #[error("server returned empty response")]
    EmptyBody,

    /// Body present but not the expected envelope
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed envelope whose `code` is not 200, or without `data`
    #[error("{message}")]
    Business { code: i64, message: String },
}

/// What the user is told about a failed request, resolved to text at draw time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureNotice {
    Network,
    EmptyResponse,
    GenerateFailed,
    /// Reason reported by the backend, shown as-is
    Backend(String),
}

impl FailureNotice {
    pub fn message<'a>(&'a self, t: &'a Translations) -> &'a str {
        match self {
            Self::Network => t.network_error,
            Self::EmptyResponse => t.empty_response,
            Self::GenerateFailed => t.generate_failed,
            Self::Backend(message) => message,
        }
    }
}

impl ApiError {
    /// User-facing notice for this failure
    ///
    /// Business failures carry the backend's own reason; an empty body gets its
    /// own hint; every other kind collapses to the generic network error.
    pub fn notice(&self) -> FailureNotice {
        match self {
            Self::Business { message, .. } if !message.trim().is_empty() => {
                FailureNotice::Backend(message.clone())
            }
            Self::Business { .. } => FailureNotice::GenerateFailed,
            Self::EmptyBody => FailureNotice::EmptyResponse,
            Self::Transport(_) | Self::Http { .. } | Self::Parse(_) => FailureNotice::Network,
        }
    }

    /// Short tag for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Http { .. } => "http",
            Self::EmptyBody => "empty_body",
            Self::Parse(_) => "parse",
            Self::Business { .. } => "business",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{tr, Language};

    fn parse_error() -> ApiError {
        ApiError::from(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
    }

    #[test]
    fn test_business_message_is_surfaced() {
        let err = ApiError::Business {
            code: 400,
            message: "invalid category".to_string(),
        };
        assert_eq!(
            err.notice(),
            FailureNotice::Backend("invalid category".to_string())
        );
        assert_eq!(err.notice().message(tr(Language::En)), "invalid category");
        assert_eq!(err.to_string(), "invalid category");
    }

    #[test]
    fn test_blank_business_message_falls_back() {
        let err = ApiError::Business {
            code: 500,
            message: "  ".to_string(),
        };
        assert_eq!(err.notice(), FailureNotice::GenerateFailed);
        assert_eq!(
            err.notice().message(tr(Language::Zh)),
            tr(Language::Zh).generate_failed
        );
    }

    #[test]
    fn test_http_and_parse_collapse_to_network_error() {
        let t = tr(Language::En);
        assert_eq!(ApiError::Http { status: 500 }.notice(), FailureNotice::Network);
        assert_eq!(parse_error().notice(), FailureNotice::Network);
        assert_eq!(FailureNotice::Network.message(t), t.network_error);
    }

    #[test]
    fn test_empty_body_has_its_own_message() {
        let t = tr(Language::En);
        assert_eq!(ApiError::EmptyBody.notice().message(t), t.empty_response);
        assert_eq!(ApiError::EmptyBody.to_string(), "server returned empty response");
    }

    #[test]
    fn test_notice_follows_language() {
        let notice = ApiError::Http { status: 502 }.notice();
        assert_eq!(notice.message(tr(Language::En)), tr(Language::En).network_error);
        assert_eq!(notice.message(tr(Language::Zh)), tr(Language::Zh).network_error);
    }

    #[test]
    fn test_http_error_carries_status() {
        let err = ApiError::Http { status: 503 };
        assert!(err.to_string().contains("503"));
        assert_eq!(err.kind(), "http");
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            ApiError::Http { status: 404 }.kind(),
            ApiError::EmptyBody.kind(),
            parse_error().kind(),
            ApiError::Business {
                code: 400,
                message: String::new(),
            }
            .kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
