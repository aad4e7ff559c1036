//! Transport boundary
//!
//! The pipeline only needs "send a request, get a response". [`HttpTransport`]
//! is that seam; [`ReqwestTransport`] is the default implementation and any
//! other client (a proxy, a recording mock, a different TLS stack) can be
//! plugged in through [`ClientOptions::with_transport`](crate::ClientOptions::with_transport).

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url, Version};
use thiserror::Error;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// A fully built request, ready to be handed to a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// Serialized JSON payload. Empty when the call carries no payload.
    pub body: Vec<u8>,
}

/// Transport-level metadata of a response.
///
/// Attached to every decoded response and to every error that had a response,
/// so callers can inspect the raw status, headers, protocol and connection
/// security of the exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub version: Version,
    pub headers: HeaderMap,
    pub remote_addr: Option<SocketAddr>,
    /// DER-encoded peer certificate, when the transport exposes TLS details.
    pub peer_certificate: Option<Vec<u8>>,
    /// Method of the request that produced this response.
    pub method: Method,
    /// Final URL of the request that produced this response.
    pub url: Url,
}

impl HttpResponse {
    /// Minimal response metadata, for custom transports.
    pub fn new(status: StatusCode, method: Method, url: Url) -> Self {
        Self {
            status,
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            remote_addr: None,
            peer_certificate: None,
            method,
            url,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Canonical reason phrase of the status code (`"Not Found"`), or `""`.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Whether the exchange went over TLS.
    pub fn is_secure(&self) -> bool {
        self.url.scheme() == "https"
    }
}

/// A response whose body has not been read yet.
pub struct TransportResponse {
    pub meta: HttpResponse,
    pub body: Box<dyn ResponseBody>,
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

/// Lazily read response body.
///
/// Dropping an unread body releases the underlying connection.
#[async_trait]
pub trait ResponseBody: Send {
    /// Reads the remaining body. A second call returns an empty buffer.
    async fn read_all(&mut self) -> Result<Vec<u8>, TransportError>;
}

/// A body that is already in memory.
#[derive(Debug, Default)]
pub struct BufferedBody(Option<Vec<u8>>);

impl BufferedBody {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Some(bytes.into()))
    }
}

#[async_trait]
impl ResponseBody for BufferedBody {
    async fn read_all(&mut self) -> Result<Vec<u8>, TransportError> {
        Ok(self.0.take().unwrap_or_default())
    }
}

/// "Send a request, get a response."
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<TransportResponse, TransportError>;
}

/// Coarse classification of network failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection refused, DNS failure, TLS handshake failure.
    Connect,
    Timeout,
    /// Connection reset or incomplete read while receiving the body.
    Body,
    /// The request could not be sent.
    Request,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Body => "body",
            Self::Request => "request",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A network-level failure. Never retried by the library.
#[derive(Debug, Clone, Error)]
#[error("Network error ({kind}): {detail}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub detail: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            TransportErrorKind::Timeout
        } else if e.is_connect() {
            TransportErrorKind::Connect
        } else if e.is_body() || e.is_decode() {
            TransportErrorKind::Body
        } else if e.is_request() {
            TransportErrorKind::Request
        } else {
            TransportErrorKind::Other
        };
        Self::new(kind, e.to_string())
    }
}

/// Default transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with a connect timeout and TLS info capture.
    ///
    /// There is no overall request timeout: deadlines come from the per-call
    /// [`Context`](crate::Context).
    pub fn new() -> Result<Self, TransportError> {
        let builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
        #[cfg(any(feature = "native-tls", feature = "rustls"))]
        let builder = builder.tls_info(true);

        let client = builder
            .build()
            .map_err(|e| TransportError::new(TransportErrorKind::Other, e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<TransportResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let response = self
            .client
            .request(method.clone(), url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let meta = HttpResponse {
            status: response.status(),
            version: response.version(),
            headers: response.headers().clone(),
            remote_addr: response.remote_addr(),
            peer_certificate: peer_certificate(&response),
            method,
            url: response.url().clone(),
        };

        Ok(TransportResponse {
            meta,
            body: Box::new(ReqwestBody(Some(response))),
        })
    }
}

#[cfg(any(feature = "native-tls", feature = "rustls"))]
fn peer_certificate(response: &reqwest::Response) -> Option<Vec<u8>> {
    response
        .extensions()
        .get::<reqwest::tls::TlsInfo>()
        .and_then(reqwest::tls::TlsInfo::peer_certificate)
        .map(<[u8]>::to_vec)
}

#[cfg(not(any(feature = "native-tls", feature = "rustls")))]
fn peer_certificate(_response: &reqwest::Response) -> Option<Vec<u8>> {
    None
}

struct ReqwestBody(Option<reqwest::Response>);

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read_all(&mut self) -> Result<Vec<u8>, TransportError> {
        match self.0.take() {
            Some(response) => Ok(response.bytes().await?.to_vec()),
            None => Ok(Vec::new()),
        }
    }
}
