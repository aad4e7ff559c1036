//! DNS record types

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::response::{BaseResponse, api_response};
use crate::credentials::{Credentials, credential_bearing};
use crate::utils::wire;

/// DNS record type.
///
/// Unknown types still decode (as [`Other`](Self::Other)) so that a record set
/// containing a type this crate does not know about is not rejected as a whole;
/// use [`is_valid`](Self::is_valid) to check membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DnsRecordType {
    A,
    Mx,
    Cname,
    Alias,
    Txt,
    Ns,
    Aaaa,
    Srv,
    Tlsa,
    Caa,
    Https,
    Svcb,
    Other(String),
}

impl DnsRecordType {
    /// Every type the API accepts.
    pub const KNOWN: [Self; 12] = [
        Self::A,
        Self::Mx,
        Self::Cname,
        Self::Alias,
        Self::Txt,
        Self::Ns,
        Self::Aaaa,
        Self::Srv,
        Self::Tlsa,
        Self::Caa,
        Self::Https,
        Self::Svcb,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Mx => "MX",
            Self::Cname => "CNAME",
            Self::Alias => "ALIAS",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Aaaa => "AAAA",
            Self::Srv => "SRV",
            Self::Tlsa => "TLSA",
            Self::Caa => "CAA",
            Self::Https => "HTTPS",
            Self::Svcb => "SVCB",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_valid(&self) -> bool {
        Self::KNOWN.iter().any(|known| known.as_str() == self.as_str())
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DnsRecordType {
    fn from(value: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == value)
            .unwrap_or_else(|| Self::Other(value.to_string()))
    }
}

impl FromStr for DnsRecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for DnsRecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DnsRecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// A DNS record as stored by the registrar.
///
/// `ttl` and `prio` stay decimal strings, as on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// `None` until the record has been created.
    #[serde(
        default,
        with = "wire::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    /// Fully qualified name on reads, subdomain part on writes.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: DnsRecordType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            record_type,
            content: content.into(),
            ttl: None,
            prio: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }

    #[must_use]
    pub fn with_prio(mut self, prio: impl Into<String>) -> Self {
        self.prio = Some(prio.into());
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Replacement values for a record edited by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRecord {
    /// Subdomain; empty for the root.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
}

/// Replacement values for every record matching a type and subdomain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditTypeRecord {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetRecordsRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetRecordsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRecordRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(flatten)]
    pub record: DnsRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Id of the new record.
    #[serde(default, deserialize_with = "wire::flexible_id::deserialize")]
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditRecordRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(flatten)]
    pub record: EditRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditRecordTypeRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(flatten)]
    pub record: EditTypeRecord,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteRecordRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}

/// Same body as a delete by id; the target lives in the path.
pub type DeleteRecordByTypeRequest = DeleteRecordRequest;

pub type EditRecordResponse = BaseResponse;
pub type DeleteRecordResponse = BaseResponse;

credential_bearing!(
    GetRecordsRequest,
    CreateRecordRequest,
    EditRecordRequest,
    EditRecordTypeRequest,
    DeleteRecordRequest,
);

api_response!(GetRecordsResponse, CreateRecordResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_membership() {
        assert!(DnsRecordType::from("A").is_valid());
        assert!(DnsRecordType::from("SVCB").is_valid());
        assert!(!DnsRecordType::from("INVALID").is_valid());
        assert!(!DnsRecordType::from("a").is_valid());
        assert_eq!(
            DnsRecordType::from("INVALID"),
            DnsRecordType::Other("INVALID".to_string())
        );
    }

    #[test]
    fn record_type_round_trips_through_str() {
        for known in DnsRecordType::KNOWN {
            let parsed: DnsRecordType = known.as_str().parse().unwrap();
            assert_eq!(parsed, known);
        }
    }

    #[test]
    fn decodes_record_with_string_id() {
        let record: DnsRecord = serde_json::from_str(
            r#"{"id":"421766139","name":"www.example.com","type":"CNAME","content":"example.com","ttl":"600","prio":"0","notes":""}"#,
        )
        .unwrap();
        assert_eq!(record.id, Some(421_766_139));
        assert_eq!(record.record_type, DnsRecordType::Cname);
        assert_eq!(record.ttl.as_deref(), Some("600"));
        assert_eq!(record.prio.as_deref(), Some("0"));
    }

    #[test]
    fn decodes_record_with_unknown_type_and_nulls() {
        let record: DnsRecord = serde_json::from_str(
            r#"{"id":"1","name":"example.com","type":"LOC","content":"x","ttl":"600","prio":null,"notes":null}"#,
        )
        .unwrap();
        assert!(!record.record_type.is_valid());
        assert_eq!(record.prio, None);
        assert_eq!(record.notes, None);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let result: Result<DnsRecord, _> =
            serde_json::from_str(r#"{"id":"abc","name":"x","type":"A","content":"1.1.1.1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_is_flat() {
        let request = CreateRecordRequest {
            credentials: Credentials::new("pk1", "sk1"),
            record: DnsRecord::new("www", DnsRecordType::A, "1.1.1.1").with_ttl("600"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "apikey": "pk1",
                "secretapikey": "sk1",
                "name": "www",
                "type": "A",
                "content": "1.1.1.1",
                "ttl": "600"
            })
        );
    }

    #[test]
    fn edit_type_request_omits_empty_optionals() {
        let request = EditRecordTypeRequest {
            credentials: Credentials::default(),
            record: EditTypeRecord {
                content: "1.1.1.2".to_string(),
                ttl: None,
                prio: None,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("ttl").is_none());
        assert!(json.get("prio").is_none());
        assert_eq!(json["content"], "1.1.1.2");
    }
}
