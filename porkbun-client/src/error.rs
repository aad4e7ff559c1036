use thiserror::Error;

use crate::context::ContextError;
use crate::transport::{HttpResponse, TransportError};
use crate::types::ErrorResponse;

/// Unified error type for every client call.
///
/// Variants that saw an HTTP response ([`Api`](Self::Api), [`Http`](Self::Http),
/// [`Decode`](Self::Decode)) keep it; see [`http_response`](Self::http_response).
/// Nothing is retried by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// No call context, or the context was cancelled / expired.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Method or URL could not form a valid request.
    #[error("Malformed request: {detail}")]
    MalformedRequest {
        /// What was wrong with it.
        detail: String,
    },

    /// The request payload could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The transport failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-200 response whose body was not an error envelope.
    #[error("HTTP error {status}: {reason}")]
    Http {
        status: u16,
        reason: String,
        response: Box<HttpResponse>,
    },

    /// Non-200 response carrying the API's error envelope.
    #[error(transparent)]
    Api(Box<ErrorResponse>),

    /// 200 response whose body did not decode into the expected type.
    #[error(transparent)]
    Decode(Box<DecodeError>),
}

/// A success body that failed to decode.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DecodeError {
    pub message: String,
    #[source]
    pub source: serde_json::Error,
    pub response: HttpResponse,
}

impl DecodeError {
    pub fn new(source: serde_json::Error, response: HttpResponse) -> Self {
        let message = if source.is_eof() {
            format!("unexpected end of input: {source}")
        } else {
            format!("Decode error: {source}")
        };
        Self {
            message,
            source,
            response,
        }
    }
}

impl Error {
    /// 是否为 API 返回的业务错误（`status: ERROR`）。
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Message sent by the API, for [`Api`](Self::Api) errors.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api(e) => Some(&e.message),
            _ => None,
        }
    }

    /// The HTTP exchange the error came from, when one happened.
    pub fn http_response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Api(e) => e.base.http_response.as_ref(),
            Self::Http { response, .. } => Some(response),
            Self::Decode(e) => Some(&e.response),
            _ => None,
        }
    }

    /// 是否为预期行为（调用方输入错误、API 拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Context(_) | Self::MalformedRequest { .. } | Self::Api(_)
        )
    }
}

impl From<ErrorResponse> for Error {
    fn from(value: ErrorResponse) -> Self {
        Self::Api(Box::new(value))
    }
}

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        Self::Decode(Box::new(value))
    }
}

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
