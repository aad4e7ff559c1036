//! API key pair and the credential-bearing capability of request payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The public/secret API key pair, serialized as `apikey` / `secretapikey`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "apikey")]
    pub api_key: String,
    #[serde(rename = "secretapikey")]
    pub secret_api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }

    pub fn set(&mut self, api_key: &str, secret_api_key: &str) {
        api_key.clone_into(&mut self.api_key);
        secret_api_key.clone_into(&mut self.secret_api_key);
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_empty() && self.secret_api_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_api_key", &"***")
            .finish()
    }
}

/// A serializable request body.
///
/// Payloads that authenticate return their embedded [`Credentials`] from
/// [`credentials_mut`](Self::credentials_mut); the pipeline fills them in right
/// before serialization. The default is "not credential-bearing".
pub trait RequestPayload: Serialize {
    fn credentials_mut(&mut self) -> Option<&mut Credentials> {
        None
    }
}

/// Implements [`RequestPayload`] for request structs with a `credentials` field.
macro_rules! credential_bearing {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::credentials::RequestPayload for $ty {
                fn credentials_mut(&mut self) -> Option<&mut $crate::credentials::Credentials> {
                    Some(&mut self.credentials)
                }
            }
        )+
    };
}

pub(crate) use credential_bearing;

/// Writes the key pair into `payload` if it carries credentials.
///
/// Returns whether anything was injected.
pub(crate) fn inject_credentials<P>(payload: &mut P, credentials: &Credentials) -> bool
where
    P: RequestPayload + ?Sized,
{
    match payload.credentials_mut() {
        Some(slot) => {
            slot.set(&credentials.api_key, &credentials.secret_api_key);
            true
        }
        None => false,
    }
}
