//! Request/response pipeline
//!
//! Every endpoint goes through the same four steps:
//! - **build**: validate method and URL, inject credentials, serialize the payload
//! - **dispatch**: hand the request to the transport, racing the call context
//! - **classify**: only HTTP 200 is a success; anything else becomes an error,
//!   decoded from the API's error envelope when possible
//! - **decode**: read the body into the endpoint's typed response and attach
//!   the HTTP metadata
//!
//! The transport's response body is owned by the pipeline and dropped on every
//! path, which releases the underlying connection.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;

use crate::context::Context;
use crate::credentials::{Credentials, RequestPayload, inject_credentials};
use crate::error::{DecodeError, Error, Result};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ResponseBody, TransportResponse};
use crate::types::{ApiResponse, ErrorResponse};
use crate::utils::log_sanitizer::sanitize_body;

const MEDIA_TYPE_JSON: &str = "application/json";

/// Payload type for calls that send no body.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoPayload;

impl RequestPayload for NoPayload {}

/// HTTP pipeline steps
pub struct HttpUtils;

impl HttpUtils {
    /// Builds a request for `base_url + path`.
    ///
    /// # Errors
    /// * [`Error::MalformedRequest`] - invalid method token, unparsable URL, or
    ///   a URL / user agent containing whitespace or control characters
    /// * [`Error::Serialization`] - the payload failed to encode
    pub fn build_request<P>(
        method: &str,
        base_url: &str,
        path: &str,
        payload: Option<&mut P>,
        credentials: &Credentials,
        user_agent: &str,
    ) -> Result<HttpRequest>
    where
        P: RequestPayload + ?Sized,
    {
        let method = Method::from_bytes(method.as_bytes()).map_err(|_| Error::MalformedRequest {
            detail: format!("invalid method {method:?}"),
        })?;

        let raw_url = format!("{base_url}{path}");
        if raw_url.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::MalformedRequest {
                detail: format!("invalid URL {raw_url:?}"),
            });
        }
        let url = Url::parse(&raw_url).map_err(|e| Error::MalformedRequest {
            detail: format!("invalid URL {raw_url:?}: {e}"),
        })?;

        let body = match payload {
            Some(payload) => {
                inject_credentials(payload, credentials);
                serde_json::to_vec(&*payload).map_err(Error::Serialization)?
            }
            None => Vec::new(),
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE_JSON));
        let agent = HeaderValue::from_str(user_agent).map_err(|e| Error::MalformedRequest {
            detail: format!("invalid user agent {user_agent:?}: {e}"),
        })?;
        headers.insert(USER_AGENT, agent);

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Sends the request, aborting if `ctx` fires first.
    pub async fn execute_request(
        transport: &dyn HttpTransport,
        ctx: &Context,
        request: HttpRequest,
    ) -> Result<TransportResponse> {
        if let Some(reason) = ctx.check() {
            return Err(reason.into());
        }

        log::debug!("[porkbun] {} {}", request.method, request.url);
        if !request.body.is_empty() {
            log::debug!("[porkbun] Request Body: {}", sanitize_body(&request.body));
        }

        let response = tokio::select! {
            biased;
            reason = ctx.done() => return Err(reason.into()),
            result = transport.send(request) => result?,
        };

        log::debug!("[porkbun] Response Status: {}", response.meta.status_code());
        Ok(response)
    }

    /// Passes 200 responses through and turns everything else into an error.
    ///
    /// The error is an [`Error::Api`] when the body holds the error envelope
    /// (an empty body counts as an empty envelope), otherwise an
    /// [`Error::Http`] built from the status line.
    pub async fn check_response(
        ctx: &Context,
        response: TransportResponse,
    ) -> Result<TransportResponse> {
        if response.meta.status == StatusCode::OK {
            return Ok(response);
        }

        let TransportResponse { meta, mut body } = response;
        let bytes = match read_body(ctx, &mut *body).await {
            Ok(bytes) => bytes,
            Err(Error::Context(reason)) => return Err(reason.into()),
            Err(e) => {
                log::warn!("[porkbun] Failed to read error body: {e}");
                return Err(http_error(meta));
            }
        };
        drop(body);

        log::debug!("[porkbun] Response Body: {}", sanitize_body(&bytes));

        // 空 body 与 `null` 都视为空的错误信封
        let decoded = if bytes.iter().all(u8::is_ascii_whitespace) {
            Ok(ErrorResponse::default())
        } else {
            serde_json::from_slice::<Option<ErrorResponse>>(&bytes)
                .map(Option::unwrap_or_default)
        };

        match decoded {
            Ok(mut error) => {
                error.attach(meta);
                log::warn!("[porkbun] API error: {error}");
                Err(error.into())
            }
            Err(e) => {
                log::warn!(
                    "[porkbun] Undecodable error body ({e}), status {}",
                    meta.status_code()
                );
                Err(http_error(meta))
            }
        }
    }

    /// Reads the whole body and decodes it into `T`.
    pub async fn parse_json<T: ApiResponse>(
        ctx: &Context,
        response: TransportResponse,
    ) -> Result<T> {
        let TransportResponse { meta, mut body } = response;
        let bytes = read_body(ctx, &mut *body).await?;
        drop(body);

        log::debug!("[porkbun] Response Body: {}", sanitize_body(&bytes));

        match serde_json::from_slice::<T>(&bytes) {
            Ok(mut value) => {
                value.attach(meta);
                Ok(value)
            }
            Err(e) => {
                log::error!("[porkbun] JSON parse failed: {e}");
                log::error!("[porkbun] Raw response: {}", sanitize_body(&bytes));
                Err(DecodeError::new(e, meta).into())
            }
        }
    }
}

async fn read_body(ctx: &Context, body: &mut dyn ResponseBody) -> Result<Vec<u8>> {
    tokio::select! {
        biased;
        reason = ctx.done() => Err(reason.into()),
        bytes = body.read_all() => Ok(bytes?),
    }
}

fn http_error(meta: HttpResponse) -> Error {
    Error::Http {
        status: meta.status_code(),
        reason: meta.reason().to_string(),
        response: Box::new(meta),
    }
}
