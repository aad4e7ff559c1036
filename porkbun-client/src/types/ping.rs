use serde::{Deserialize, Serialize};

use super::response::{BaseResponse, api_response};
use crate::credentials::{Credentials, credential_bearing};

#[derive(Debug, Clone, Default, Serialize)]
pub struct PingRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PingResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Address the API saw the request coming from.
    #[serde(rename = "yourIp", default)]
    pub your_ip: String,
}

credential_bearing!(PingRequest);

api_response!(PingResponse);
