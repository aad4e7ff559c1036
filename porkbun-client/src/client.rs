//! Client configuration and entry point

use std::fmt;
use std::sync::Arc;

use crate::context::{self, Context};
use crate::credentials::{Credentials, RequestPayload};
use crate::error::Result;
use crate::http_client::{HttpUtils, NoPayload};
use crate::services::{DnsService, DomainsService, PricingService, SslService};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::types::{ApiResponse, PingRequest, PingResponse};
use crate::utils::wire::parse_bool;

/// Dual-stack API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.porkbun.com/api/json/v3";
/// IPv4-only API endpoint; `ping` through it reports the IPv4 address.
pub const IPV4_ONLY_BASE_URL: &str = "https://api-ipv4.porkbun.com/api/json/v3";
/// User agent sent on every request, after any custom agent.
pub const DEFAULT_USER_AGENT: &str = concat!("porkbun-client/", env!("CARGO_PKG_VERSION"));

const ENV_API_KEY: &str = "PORKBUN_API_KEY";
const ENV_SECRET_API_KEY: &str = "PORKBUN_SECRET_API_KEY";
const ENV_API_SECRET: &str = "PORKBUN_API_SECRET";
const ENV_IPV4_ONLY: &str = "PORKBUN_IPV4_ONLY";
const ENV_USER_AGENT: &str = "PORKBUN_USER_AGENT";

/// Client configuration.
#[derive(Clone, Default)]
pub struct ClientOptions {
    pub api_key: String,
    pub secret_api_key: String,
    /// Use [`IPV4_ONLY_BASE_URL`]. Ignored when `base_url` is set.
    pub ipv4_only: bool,
    /// Prepended to [`DEFAULT_USER_AGENT`].
    pub user_agent: Option<String>,
    /// Overrides the API endpoint, e.g. for a proxy or a test server.
    pub base_url: Option<String>,
    /// Defaults to a [`ReqwestTransport`].
    pub transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
            ..Self::default()
        }
    }

    /// 从环境变量读取配置
    ///
    /// - `PORKBUN_API_KEY`
    /// - `PORKBUN_SECRET_API_KEY` (or `PORKBUN_API_SECRET`)
    /// - `PORKBUN_IPV4_ONLY`: `1` / `true` / ...
    /// - `PORKBUN_USER_AGENT`
    ///
    /// Missing variables leave the defaults in place.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            api_key: var(ENV_API_KEY).unwrap_or_default(),
            secret_api_key: var(ENV_SECRET_API_KEY)
                .or_else(|| var(ENV_API_SECRET))
                .unwrap_or_default(),
            ipv4_only: var(ENV_IPV4_ONLY)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            user_agent: var(ENV_USER_AGENT),
            base_url: None,
            transport: None,
        }
    }

    #[must_use]
    pub fn with_ipv4_only(mut self, ipv4_only: bool) -> Self {
        self.ipv4_only = ipv4_only;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    fn resolve_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if self.ipv4_only => IPV4_ONLY_BASE_URL.to_string(),
            None => DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &self.api_key)
            .field("secret_api_key", &"***")
            .field("ipv4_only", &self.ipv4_only)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// `"<custom> <default>"`, or just the default when no custom agent is set.
pub fn format_user_agent(custom: Option<&str>) -> String {
    match custom.map(str::trim) {
        Some(custom) if !custom.is_empty() => format!("{custom} {DEFAULT_USER_AGENT}"),
        _ => DEFAULT_USER_AGENT.to_string(),
    }
}

/// Porkbun API client.
///
/// Immutable after construction and cheap to clone; share it freely between
/// tasks. Endpoint groups are reached through [`domains`](Self::domains),
/// [`dns`](Self::dns), [`ssl`](Self::ssl) and [`pricing`](Self::pricing).
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    base_url: String,
    user_agent: String,
}

impl Client {
    /// # Errors
    /// [`Error::Transport`](crate::Error::Transport) if the default transport
    /// cannot be initialized (TLS backend failure).
    pub fn new(options: ClientOptions) -> Result<Self> {
        let base_url = options.resolve_base_url();
        let user_agent = format_user_agent(options.user_agent.as_deref());
        let transport: Arc<dyn HttpTransport> = match options.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        log::debug!("[porkbun] Using endpoint {base_url}");

        Ok(Self {
            transport,
            credentials: Credentials::new(options.api_key, options.secret_api_key),
            base_url,
            user_agent,
        })
    }

    /// Shorthand for [`Client::new`] with only a key pair.
    pub fn with_credentials(
        api_key: impl Into<String>,
        secret_api_key: impl Into<String>,
    ) -> Result<Self> {
        Self::new(ClientOptions::new(api_key, secret_api_key))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn domains(&self) -> DomainsService<'_> {
        DomainsService::new(self)
    }

    pub fn dns(&self) -> DnsService<'_> {
        DnsService::new(self)
    }

    pub fn ssl(&self) -> SslService<'_> {
        SslService::new(self)
    }

    pub fn pricing(&self) -> PricingService<'_> {
        PricingService::new(self)
    }

    /// Checks the credentials and reports the caller's public address.
    pub async fn ping(&self, ctx: Option<&Context>) -> Result<PingResponse> {
        self.post(ctx, "/ping", Some(PingRequest::default())).await
    }

    /// Builds a request against this client's base URL with its credentials
    /// and user agent.
    pub fn build_request<P>(
        &self,
        method: &str,
        path: &str,
        payload: Option<&mut P>,
    ) -> Result<HttpRequest>
    where
        P: RequestPayload + ?Sized,
    {
        HttpUtils::build_request(
            method,
            &self.base_url,
            path,
            payload,
            &self.credentials,
            &self.user_agent,
        )
    }

    /// Runs one call through the pipeline and decodes the body into `T`.
    ///
    /// # Errors
    /// Every [`Error`](crate::Error) variant; a missing `ctx` fails before
    /// anything is built or sent.
    pub async fn execute<T, P>(
        &self,
        ctx: Option<&Context>,
        method: &str,
        path: &str,
        payload: Option<P>,
    ) -> Result<T>
    where
        T: ApiResponse,
        P: RequestPayload,
    {
        let ctx = context::require(ctx)?;
        let mut payload = payload;
        let request = self.build_request(method, path, payload.as_mut())?;

        let response = HttpUtils::execute_request(self.transport.as_ref(), ctx, request).await?;
        let response = HttpUtils::check_response(ctx, response).await?;
        HttpUtils::parse_json(ctx, response).await
    }

    /// Like [`execute`](Self::execute) but leaves a successful body unread.
    pub async fn execute_discard<P>(
        &self,
        ctx: Option<&Context>,
        method: &str,
        path: &str,
        payload: Option<P>,
    ) -> Result<HttpResponse>
    where
        P: RequestPayload,
    {
        let ctx = context::require(ctx)?;
        let mut payload = payload;
        let request = self.build_request(method, path, payload.as_mut())?;

        let response = HttpUtils::execute_request(self.transport.as_ref(), ctx, request).await?;
        let response = HttpUtils::check_response(ctx, response).await?;
        Ok(response.meta)
    }

    pub(crate) async fn post<T, P>(
        &self,
        ctx: Option<&Context>,
        path: &str,
        payload: Option<P>,
    ) -> Result<T>
    where
        T: ApiResponse,
        P: RequestPayload,
    {
        self.execute(ctx, "POST", path, payload).await
    }

    pub(crate) async fn post_empty<T: ApiResponse>(
        &self,
        ctx: Option<&Context>,
        path: &str,
    ) -> Result<T> {
        self.post(ctx, path, None::<NoPayload>).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
