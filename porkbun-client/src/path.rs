//! Endpoint path assembly.
//!
//! `"/<namespace>/<action>[/<segment>...]"`, where each segment may be absent.
//! Absent segments are dropped entirely, so later segments keep their order
//! and no empty `//` components appear.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::DnsRecordType;

/// One optional path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Text(String),
    Id(i64),
    RecordType(DnsRecordType),
    Absent,
}

impl PathSegment {
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Id(id) => write!(f, "{id}"),
            Self::RecordType(record_type) => write!(f, "{record_type}"),
            Self::Absent => Ok(()),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for PathSegment {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for PathSegment {
    fn from(value: i64) -> Self {
        Self::Id(value)
    }
}

impl From<DnsRecordType> for PathSegment {
    fn from(value: DnsRecordType) -> Self {
        Self::RecordType(value)
    }
}

impl From<&DnsRecordType> for PathSegment {
    fn from(value: &DnsRecordType) -> Self {
        Self::RecordType(value.clone())
    }
}

impl<T: Into<PathSegment>> From<Option<T>> for PathSegment {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Builds `/<namespace>/<action>` followed by every present segment.
///
/// # Errors
/// [`Error::MalformedRequest`] if a present segment is empty, is `.` / `..`,
/// or contains a character that would change which resource the URL names
/// (`/ ? # % \`, whitespace, control characters).
pub fn build_path(namespace: &str, action: &str, segments: &[PathSegment]) -> Result<String> {
    let mut path = format!("/{namespace}/{action}");
    for segment in segments.iter().filter(|s| s.is_present()) {
        let text = segment.to_string();
        validate_segment(&text)?;
        path.push('/');
        path.push_str(&text);
    }
    Ok(path)
}

fn validate_segment(text: &str) -> Result<()> {
    let reserved = |c: char| {
        matches!(c, '/' | '?' | '#' | '%' | '\\') || c.is_whitespace() || c.is_control()
    };
    if text.is_empty() || text == "." || text == ".." || text.chars().any(reserved) {
        return Err(Error::MalformedRequest {
            detail: format!("invalid path segment {text:?}"),
        });
    }
    Ok(())
}

pub(crate) fn dns_path(action: &str, segments: &[PathSegment]) -> Result<String> {
    build_path("dns", action, segments)
}

pub(crate) fn domain_path(action: &str, segments: &[PathSegment]) -> Result<String> {
    build_path("domain", action, segments)
}

pub(crate) fn ssl_path(action: &str, segments: &[PathSegment]) -> Result<String> {
    build_path("ssl", action, segments)
}
