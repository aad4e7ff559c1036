//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use porkbun_client::{
    BufferedBody, Client, ClientOptions, HttpRequest, HttpResponse, HttpTransport, ResponseBody,
    TransportError, TransportErrorKind, TransportResponse,
};
use reqwest::StatusCode;
use serde_json::Value;

/// Base URL used by every mocked client.
pub const MOCK_BASE_URL: &str = "https://porkbun.test/api/json/v3";
const MOCK_PREFIX: &str = "/api/json/v3";

pub const TEST_API_KEY: &str = "pk1_test";
pub const TEST_SECRET_API_KEY: &str = "sk1_test";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// 读取 `tests/fixtures` 下的 JSON 响应
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

struct CannedResponse {
    status: StatusCode,
    body: String,
}

/// In-memory transport: answers by endpoint path and records every request.
///
/// Unknown paths get a 404 error envelope.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, CannedResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
    body_read: Arc<AtomicBool>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answers `path` (e.g. `/dns/retrieve/example.com`) with `status` and `body`.
    pub fn respond(&self, path: &str, status: u16, body: impl Into<String>) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                path.to_string(),
                CannedResponse {
                    status,
                    body: body.into(),
                },
            );
    }

    pub fn respond_fixture(&self, path: &str, status: u16, name: &str) {
        self.respond(path, status, fixture(name));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Path of the last request, relative to the API root.
    pub fn last_path(&self) -> Option<String> {
        self.requests().last().map(|r| endpoint_path(&r.url))
    }

    /// Body of the last request, parsed as JSON (`Null` when empty).
    pub fn last_body(&self) -> Value {
        self.requests()
            .last()
            .filter(|r| !r.body.is_empty())
            .and_then(|r| serde_json::from_slice(&r.body).ok())
            .unwrap_or(Value::Null)
    }

    /// Whether any response body handed out so far has been read.
    pub fn body_was_read(&self) -> bool {
        self.body_read.load(Ordering::SeqCst)
    }
}

fn endpoint_path(url: &reqwest::Url) -> String {
    let path = url.path();
    path.strip_prefix(MOCK_PREFIX).unwrap_or(path).to_string()
}

/// Body that remembers whether it was read.
struct TrackedBody {
    inner: BufferedBody,
    read: Arc<AtomicBool>,
}

#[async_trait]
impl ResponseBody for TrackedBody {
    async fn read_all(&mut self) -> Result<Vec<u8>, TransportError> {
        self.read.store(true, Ordering::SeqCst);
        self.inner.read_all().await
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<TransportResponse, TransportError> {
        let path = endpoint_path(&request.url);
        let (status, body) = {
            let routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
            match routes.get(&path) {
                Some(canned) => (canned.status, canned.body.clone()),
                None => (
                    StatusCode::NOT_FOUND,
                    r#"{"status":"ERROR","message":"no route"}"#.to_string(),
                ),
            }
        };

        let meta = HttpResponse::new(status, request.method.clone(), request.url.clone());
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        Ok(TransportResponse {
            meta,
            body: Box::new(TrackedBody {
                inner: BufferedBody::new(body),
                read: Arc::clone(&self.body_read),
            }),
        })
    }
}

/// Transport that never answers; counts how often it was called.
#[derive(Default)]
pub struct HangingTransport {
    calls: AtomicUsize,
}

impl HangingTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for HangingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

/// Transport that always fails with the given kind.
pub struct FailingTransport(pub TransportErrorKind);

#[async_trait]
impl HttpTransport for FailingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<TransportResponse, TransportError> {
        Err(TransportError::new(self.0, "connection refused"))
    }
}

pub fn mock_options(transport: Arc<dyn HttpTransport>) -> ClientOptions {
    ClientOptions::new(TEST_API_KEY, TEST_SECRET_API_KEY)
        .with_base_url(MOCK_BASE_URL)
        .with_transport(transport)
}

/// Client wired to a fresh [`MockTransport`].
pub fn mock_client() -> (Client, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let client = Client::new(mock_options(transport.clone()))
        .unwrap_or_else(|e| panic!("failed to build mock client: {e}"));
    (client, transport)
}

/// 集成测试上下文 - 封装真实客户端和测试域名
pub struct LiveContext {
    pub client: Client,
    pub domain: String,
}

impl LiveContext {
    pub fn from_env() -> Option<Self> {
        let domain = env::var("TEST_DOMAIN").ok()?;
        let client = Client::new(ClientOptions::from_env()).ok()?;
        Some(Self { client, domain })
    }
}
