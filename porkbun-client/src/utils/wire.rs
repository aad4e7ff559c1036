//! Decoders for fields whose wire type disagrees with their meaning.
//!
//! Used through `#[serde(with = "...")]`:
//! - [`bool_string`]: `"1"` / `"0"` / `"true"` / `"false"` strings
//! - [`bool_number`]: `1` / `0` numbers
//! - [`optional_id`]: numeric identifier sent as a string, possibly absent
//! - [`flexible_id`]: identifier sent either as a number or a string

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serializer};

/// Boolean parsing with the accepted spellings `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Booleans encoded as strings.
pub mod bool_string {
    use super::{Deserialize, Deserializer, Serializer, Unexpected, de, parse_bool};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_bool(&raw).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean string such as \"1\" or \"0\"")
        })
    }
}

/// Booleans encoded as numbers; only `1` is true.
pub mod bool_number {
    use super::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(i64::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(raw == 1)
    }
}

/// `Option<i64>` carried as a decimal string; `null` or a missing field is `None`.
///
/// Pair with `#[serde(default)]` so a missing field decodes.
pub mod optional_id {
    use super::{Deserialize, Deserializer, Serializer, Unexpected, de};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => serializer.serialize_str(&id.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        raw.parse::<i64>().map(Some).map_err(|_| {
            de::Error::invalid_value(Unexpected::Str(&raw), &"a base-10 64-bit integer string")
        })
    }
}

/// `i64` accepted either as a JSON number or a decimal string.
pub mod flexible_id {
    use super::{Deserialize, Deserializer, Unexpected, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(id) => Ok(id),
            NumberOrString::String(raw) => raw.parse::<i64>().map_err(|_| {
                de::Error::invalid_value(Unexpected::Str(&raw), &"a base-10 64-bit integer")
            }),
        }
    }
}
