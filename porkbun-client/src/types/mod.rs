//! Request and response types, one module per endpoint group.

mod dns;
mod domain;
mod forward;
mod nameserver;
mod ping;
mod pricing;
mod response;
mod ssl;

pub use dns::*;
pub use domain::*;
pub use forward::*;
pub use nameserver::*;
pub use ping::*;
pub use pricing::*;
pub use ssl::*;
pub use response::{ApiResponse, BaseResponse, ErrorResponse, STATUS_ERROR, STATUS_SUCCESS};
