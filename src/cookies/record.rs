//! Serializable form of a cookie.
//!
//! Used for debugging dumps and test fixtures. Deserializing a [`Cookie`]
//! goes through [`CookieRecord`] and runs the same validation as the
//! constructor, so an invalid record never becomes a cookie.

use super::canonicalcookie::Cookie;
use crate::base::cookieerror::CookieError;
use crate::dns::{GaiResolver, HostResolver};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Plain-data representation of a cookie.
///
/// Attributes are optional so that a missing field surfaces as
/// [`CookieError::MissingAttribute`] rather than a serde error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_unix_secs: Option<i64>,
    #[serde(default)]
    pub secure: bool,
}

impl CookieRecord {
    /// Validates the record, checking the domain with `resolver`.
    pub fn into_cookie(self, resolver: &dyn HostResolver) -> Result<Cookie, CookieError> {
        let expiry = self
            .expires_unix_secs
            .map(|secs| {
                OffsetDateTime::from_unix_timestamp(secs)
                    .map_err(|_| CookieError::ExpiryOutOfRange { secs })
            })
            .transpose()?;

        let mut builder = Cookie::builder().expiry(expiry).secure(self.secure);
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(value) = self.value {
            builder = builder.value(value);
        }
        if let Some(domain) = self.domain {
            builder = builder.domain(domain);
        }
        if let Some(path) = self.path {
            builder = builder.path(path);
        }
        builder.build_with(resolver)
    }
}

impl From<Cookie> for CookieRecord {
    fn from(cookie: Cookie) -> Self {
        CookieRecord {
            name: Some(cookie.name().to_string()),
            value: Some(cookie.value().to_string()),
            domain: Some(cookie.domain().to_string()),
            path: Some(cookie.path().to_string()),
            expires_unix_secs: cookie.expiry().map(|t| t.unix_timestamp()),
            secure: cookie.is_secure(),
        }
    }
}

impl TryFrom<CookieRecord> for Cookie {
    type Error = CookieError;

    fn try_from(record: CookieRecord) -> Result<Self, Self::Error> {
        record.into_cookie(&GaiResolver)
    }
}
