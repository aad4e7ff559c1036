//! URL forwarding types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::response::{BaseResponse, api_response};
use crate::credentials::{Credentials, credential_bearing};

/// Redirect kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardType {
    /// 302
    Temporary,
    /// 301
    Permanent,
}

impl fmt::Display for ForwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temporary => write!(f, "temporary"),
            Self::Permanent => write!(f, "permanent"),
        }
    }
}

/// `"yes"` / `"no"` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub fn as_bool(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

/// A URL forward rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlForward {
    /// Empty to forward the root domain.
    #[serde(default)]
    pub subdomain: String,
    /// Destination URL.
    pub location: String,
    #[serde(rename = "type")]
    pub forward_type: ForwardType,
    /// Append the request URI path to the destination.
    pub include_path: YesNo,
    /// Also forward every subdomain.
    pub wildcard: YesNo,
}

/// A forward rule as listed, with its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlForwardData {
    pub id: String,
    #[serde(flatten)]
    pub forward: UrlForward,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUrlForwardingRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetUrlForwardingResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub forwards: Vec<UrlForwardData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddUrlForwardRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(flatten)]
    pub forward: UrlForward,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteUrlForwardRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}

pub type AddUrlForwardResponse = BaseResponse;
pub type DeleteUrlForwardResponse = BaseResponse;

credential_bearing!(
    GetUrlForwardingRequest,
    AddUrlForwardRequest,
    DeleteUrlForwardRequest,
);

api_response!(GetUrlForwardingResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listed_forward() {
        let forward: UrlForwardData = serde_json::from_str(
            r#"{"id":"22049216","subdomain":"","location":"https://porkbun.com","type":"temporary","includePath":"no","wildcard":"yes"}"#,
        )
        .unwrap();
        assert_eq!(forward.id, "22049216");
        assert_eq!(forward.forward.forward_type, ForwardType::Temporary);
        assert_eq!(forward.forward.include_path, YesNo::No);
        assert!(forward.forward.wildcard.as_bool());
    }

    #[test]
    fn rejects_unknown_forward_type() {
        let result: Result<UrlForward, _> = serde_json::from_str(
            r#"{"location":"https://porkbun.com","type":"sideways","includePath":"no","wildcard":"no"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn add_request_is_flat() {
        let request = AddUrlForwardRequest {
            credentials: Credentials::new("pk1", "sk1"),
            forward: UrlForward {
                subdomain: "blog".to_string(),
                location: "https://example.net".to_string(),
                forward_type: ForwardType::Permanent,
                include_path: true.into(),
                wildcard: false.into(),
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "apikey": "pk1",
                "secretapikey": "sk1",
                "subdomain": "blog",
                "location": "https://example.net",
                "type": "permanent",
                "includePath": "yes",
                "wildcard": "no"
            })
        );
    }
}
