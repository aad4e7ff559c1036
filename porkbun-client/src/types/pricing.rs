//! Pricing types

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::response::{BaseResponse, api_response};

/// A promotional coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub max_per_user: i64,
    /// `"yes"` / `"no"`.
    pub first_year_only: String,
    /// Discount kind, e.g. `amount`.
    #[serde(rename = "type")]
    pub coupon_type: String,
    pub amount: i64,
}

const UNEXPECTED_COUPONS: &str = "coupons field has an unexpected type";

/// Coupons keyed by what they apply to (`registration`, `renewal`, ...).
///
/// The API sends an object when coupons exist and `[]` when none do; both
/// decode here, an empty array (or `null`) as an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coupons(pub BTreeMap<String, Coupon>);

impl Coupons {
    pub fn into_inner(self) -> BTreeMap<String, Coupon> {
        self.0
    }
}

impl Deref for Coupons {
    type Target = BTreeMap<String, Coupon>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Coupons {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => {
                let coupons = serde_json::from_value(Value::Object(map))
                    .map_err(|_| de::Error::custom(UNEXPECTED_COUPONS))?;
                Ok(Self(coupons))
            }
            Value::Null => Ok(Self::default()),
            Value::Array(items) if items.is_empty() => Ok(Self::default()),
            _ => Err(de::Error::custom(UNEXPECTED_COUPONS)),
        }
    }
}

/// Prices for one TLD, as decimal strings in USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub registration: String,
    pub renewal: String,
    pub transfer: String,
    #[serde(default)]
    pub coupons: Coupons,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Keyed by TLD without the leading dot.
    #[serde(default)]
    pub pricing: BTreeMap<String, Pricing>,
}

api_response!(PricingResponse);
