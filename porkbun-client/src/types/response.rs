//! Response envelope shared by every endpoint.

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::transport::HttpResponse;

/// `status` value of a successful call.
pub const STATUS_SUCCESS: &str = "SUCCESS";
/// `status` value of a rejected call.
pub const STATUS_ERROR: &str = "ERROR";

/// Fields every response carries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BaseResponse {
    /// `SUCCESS` or `ERROR`, as sent by the API.
    #[serde(default)]
    pub status: String,
    /// The underlying HTTP exchange. Filled in by the client after decoding.
    #[serde(skip)]
    pub http_response: Option<HttpResponse>,
}

impl BaseResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// A decoded success body that embeds a [`BaseResponse`].
pub trait ApiResponse: DeserializeOwned {
    fn base(&self) -> &BaseResponse;

    fn base_mut(&mut self) -> &mut BaseResponse;

    fn status(&self) -> &str {
        &self.base().status
    }

    fn http_response(&self) -> Option<&HttpResponse> {
        self.base().http_response.as_ref()
    }

    /// Attaches the HTTP exchange the body was read from.
    fn attach(&mut self, response: HttpResponse) {
        self.base_mut().http_response = Some(response);
    }
}

impl ApiResponse for BaseResponse {
    fn base(&self) -> &BaseResponse {
        self
    }

    fn base_mut(&mut self) -> &mut BaseResponse {
        self
    }
}

/// Implements [`ApiResponse`] for response structs with a `base` field.
macro_rules! api_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::types::ApiResponse for $ty {
                fn base(&self) -> &$crate::types::BaseResponse {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut $crate::types::BaseResponse {
                    &mut self.base
                }
            }
        )+
    };
}

pub(crate) use api_response;

/// Error body returned with any non-200 status: `{"status":"ERROR","message":...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Human-readable message from the API.
    #[serde(default)]
    pub message: String,
}

api_response!(ErrorResponse);

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.base.http_response {
            Some(response) => write!(
                f,
                "{} {}: {} {}",
                response.method,
                response.url,
                response.status_code(),
                self.message
            ),
            None => write!(f, "Error: {}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}
