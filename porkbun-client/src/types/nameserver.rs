//! Nameserver types

use serde::{Deserialize, Serialize};

use super::response::{BaseResponse, api_response};
use crate::credentials::{Credentials, credential_bearing};

/// Ordered nameserver hostnames.
pub type NameServers = Vec<String>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetNameServersRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetNameServersResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub ns: NameServers,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateNameServersRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    pub ns: NameServers,
}

pub type UpdateNameServersResponse = BaseResponse;

credential_bearing!(GetNameServersRequest, UpdateNameServersRequest);

api_response!(GetNameServersResponse);
