//! Endpoint facades
//!
//! Each service borrows the [`Client`](crate::Client), builds the request
//! value for one endpoint and runs it through the pipeline.

mod dns;
mod domain;
mod forward;
mod nameserver;
mod pricing;
mod ssl;

pub use dns::DnsService;
pub use domain::DomainsService;
pub use pricing::PricingService;
pub use ssl::SslService;
