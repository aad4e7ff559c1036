//! Domain listing types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::response::{BaseResponse, api_response};
use crate::credentials::{Credentials, credential_bearing};
use crate::utils::{datetime, wire};

/// A domain registered on the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDomain")]
pub struct Domain {
    pub domain: String,
    /// Registry status, e.g. `ACTIVE`.
    pub status: String,
    pub tld: String,
    #[serde(serialize_with = "datetime::serialize")]
    pub create_date: DateTime<Utc>,
    #[serde(serialize_with = "datetime::serialize")]
    pub expire_date: DateTime<Utc>,
    #[serde(serialize_with = "wire::bool_string::serialize")]
    pub security_lock: bool,
    #[serde(serialize_with = "wire::bool_string::serialize")]
    pub whois_privacy: bool,
    #[serde(serialize_with = "wire::bool_number::serialize")]
    pub auto_renew: bool,
    #[serde(serialize_with = "wire::bool_number::serialize")]
    pub not_local: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
}

/// Wire shape of [`Domain`] before the timestamps are parsed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDomain {
    #[serde(default)]
    domain: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    tld: String,
    #[serde(default)]
    create_date: String,
    #[serde(default)]
    expire_date: String,
    #[serde(default, with = "wire::bool_string")]
    security_lock: bool,
    #[serde(default, with = "wire::bool_string")]
    whois_privacy: bool,
    #[serde(default, with = "wire::bool_number")]
    auto_renew: bool,
    #[serde(default, with = "wire::bool_number")]
    not_local: bool,
    #[serde(default)]
    labels: Option<Vec<Label>>,
}

impl TryFrom<RawDomain> for Domain {
    type Error = String;

    fn try_from(raw: RawDomain) -> Result<Self, Self::Error> {
        let create_date = datetime::parse_timestamp(&raw.create_date)
            .map_err(|e| format!("error parsing CreateDate: {e}"))?;
        let expire_date = datetime::parse_timestamp(&raw.expire_date)
            .map_err(|e| format!("error parsing ExpireDate: {e}"))?;

        Ok(Self {
            domain: raw.domain,
            status: raw.status,
            tld: raw.tld,
            create_date,
            expire_date,
            security_lock: raw.security_lock,
            whois_privacy: raw.whois_privacy,
            auto_renew: raw.auto_renew,
            not_local: raw.not_local,
            labels: raw.labels,
        })
    }
}

/// Account label attached to a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub title: String,
    pub color: String,
}

/// Optional filters for [`list_domains`](crate::DomainsService::list_domains).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainListOptions {
    /// Pagination offset; the API returns 1000 domains per page.
    pub start: Option<String>,
    /// `"yes"` to include label information.
    pub include_labels: Option<String>,
}

impl DomainListOptions {
    #[must_use]
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    #[must_use]
    pub fn with_labels(mut self) -> Self {
        self.include_labels = Some("yes".to_string());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDomainsRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_labels: Option<String>,
}

impl From<DomainListOptions> for ListDomainsRequest {
    fn from(options: DomainListOptions) -> Self {
        Self {
            credentials: Credentials::default(),
            start: options.start,
            include_labels: options.include_labels,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListDomainsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

credential_bearing!(ListDomainsRequest);

api_response!(ListDomainsResponse);
