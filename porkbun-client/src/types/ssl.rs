//! SSL bundle types

use serde::{Deserialize, Serialize};

use super::response::{BaseResponse, api_response};
use crate::credentials::{Credentials, credential_bearing};

#[derive(Debug, Clone, Default, Serialize)]
pub struct SslRetrieveRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}

/// Certificate bundle issued for a domain. All fields are PEM text.
#[derive(Clone, Deserialize)]
pub struct SslRetrieveResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "certificatechain", default)]
    pub certificate_chain: String,
    #[serde(rename = "privatekey", default)]
    pub private_key: String,
    #[serde(rename = "publickey", default)]
    pub public_key: String,
}

impl std::fmt::Debug for SslRetrieveResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SslRetrieveResponse")
            .field("base", &self.base)
            .field("certificate_chain", &self.certificate_chain)
            .field("private_key", &"***")
            .field("public_key", &self.public_key)
            .finish()
    }
}

credential_bearing!(SslRetrieveRequest);

api_response!(SslRetrieveResponse);
