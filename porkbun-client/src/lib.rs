//! # porkbun-client
//!
//! Typed async client for the [Porkbun](https://porkbun.com/) registrar
//! JSON API: domain listing, DNS records, URL forwarding, nameservers, SSL
//! bundles, pricing and ping.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! porkbun-client = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use porkbun_client::{Client, ClientOptions, Context};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a client from PORKBUN_API_KEY / PORKBUN_SECRET_API_KEY
//!     let client = Client::new(ClientOptions::from_env())?;
//!
//!     // 2. Every call takes a context carrying its deadline / cancellation
//!     let ctx = Context::with_timeout(Duration::from_secs(30));
//!
//!     // 3. Check the credentials
//!     let ping = client.ping(Some(&ctx)).await?;
//!     println!("calling from {}", ping.your_ip);
//!
//!     // 4. List domains and their records
//!     let domains = client.domains().list_domains(Some(&ctx), None).await?;
//!     for domain in &domains.domains {
//!         let records = client.dns().get_records(Some(&ctx), &domain.domain, None).await?;
//!         for record in &records.records {
//!             println!("{} {} -> {}", record.name, record.record_type, record.content);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Creating Records
//!
//! ```rust,no_run
//! # use porkbun_client::*;
//! # async fn example(client: Client, ctx: Context) -> Result<()> {
//! let record = DnsRecord::new("www", DnsRecordType::A, "1.2.3.4").with_ttl("600");
//! let created = client.dns().create_record(Some(&ctx), "example.com", record).await?;
//! println!("created record {}", created.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`Result<T, Error>`](Error):
//!
//! - [`Error::Api`]: the API answered with `{"status":"ERROR","message":...}`
//! - [`Error::Http`]: non-200 response without a readable error body
//! - [`Error::Decode`]: a 200 response that did not match the expected shape
//! - [`Error::Transport`]: the request never got a response
//! - [`Error::Context`]: no context was given, or it fired
//!
//! Nothing is retried. Every error that came with a response exposes it through
//! [`Error::http_response`].

mod client;
mod context;
mod credentials;
mod error;
mod http_client;
mod path;
mod services;
mod transport;
mod types;
mod utils;

// Re-export client
pub use client::{
    Client, ClientOptions, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, IPV4_ONLY_BASE_URL,
    format_user_agent,
};

// Re-export call context
pub use context::{CancelHandle, Context, ContextError};

// Re-export error types
pub use error::{DecodeError, Error, Result};

// Re-export pipeline building blocks
pub use credentials::{Credentials, RequestPayload};
pub use http_client::{HttpUtils, NoPayload};
pub use path::{PathSegment, build_path};
pub use transport::{
    BufferedBody, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, ResponseBody,
    TransportError, TransportErrorKind, TransportResponse,
};

// Re-export services
pub use services::{DnsService, DomainsService, PricingService, SslService};

// Re-export types
pub use types::*;

// Re-export utils module
pub use utils::{datetime, wire};
