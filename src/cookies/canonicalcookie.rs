use crate::base::cookieerror::CookieError;
use crate::dns::{GaiResolver, HostResolver, Name};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Duration,
    OffsetDateTime, UtcOffset,
};
use url::{Host, Url};

use super::record::CookieRecord;

const EXPIRES_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Represents a cookie seen or set during a browser session.
///
/// A `Cookie` can only be obtained through validation ([`Cookie::new`],
/// [`CookieBuilder`] or deserialization), so every instance satisfies:
///
/// - `name` is non-empty and contains no `;`
/// - `domain` is lowercase, and resolved as a host if non-empty
/// - `path` is never empty (defaults to `/`)
/// - `expiry` has no sub-second component
///
/// Equality and hashing only consider `name` and `domain`. Two cookies with
/// the same name on the same domain are the same cookie, whatever their
/// value, path, expiry or secure flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "CookieRecord", try_from = "CookieRecord")]
pub struct Cookie {
    name: String,
    value: String,
    domain: String,
    path: String,
    expiry: Option<OffsetDateTime>,
    secure: bool,
}

impl Cookie {
    /// Starts a [`CookieBuilder`] with every attribute absent.
    pub fn builder() -> CookieBuilder {
        CookieBuilder::default()
    }

    /// Creates a cookie, checking a non-empty domain with the system resolver.
    ///
    /// An empty `path` becomes `/`.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
        expiry: Option<OffsetDateTime>,
        secure: bool,
    ) -> Result<Self, CookieError> {
        Self::builder()
            .name(name)
            .value(value)
            .domain(domain)
            .path(path)
            .expiry(expiry)
            .secure(secure)
            .build()
    }

    /// Same as [`Cookie::new`] but checks the domain with `resolver`.
    pub fn with_resolver(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
        expiry: Option<OffsetDateTime>,
        secure: bool,
        resolver: &dyn HostResolver,
    ) -> Result<Self, CookieError> {
        Self::builder()
            .name(name)
            .value(value)
            .domain(domain)
            .path(path)
            .expiry(expiry)
            .secure(secure)
            .build_with(resolver)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Lowercased domain; empty for a cookie not bound to a domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Expiry truncated to whole seconds, `None` for a session cookie.
    pub fn expiry(&self) -> Option<OffsetDateTime> {
        self.expiry
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Host to look up for the domain check.
    ///
    /// `None` when there is nothing to resolve: an empty domain, or a domain
    /// that is already an IP literal.
    fn resolvable_host(&self) -> Result<Option<Name>, CookieError> {
        if self.domain.is_empty() {
            return Ok(None);
        }

        let candidate = if self.domain.starts_with("http") {
            Cow::Borrowed(self.domain.as_str())
        } else {
            Cow::Owned(format!("http://{}", self.domain))
        };

        let invalid = || CookieError::InvalidUrl {
            domain: self.domain.clone(),
        };
        let url = Url::parse(&candidate).map_err(|_| invalid())?;
        match url.host() {
            Some(Host::Domain(host)) => Ok(Some(Name::new(host))),
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(None),
            None => Err(invalid()),
        }
    }

    fn check_domain(&self, resolver: &dyn HostResolver) -> Result<(), CookieError> {
        match self.resolvable_host()? {
            Some(host) => ensure_resolves(&self.domain, &host, resolver),
            None => Ok(()),
        }
    }
}

fn ensure_resolves(
    domain: &str,
    host: &Name,
    resolver: &dyn HostResolver,
) -> Result<(), CookieError> {
    let mut addrs = resolver
        .resolve(host)
        .map_err(|e| CookieError::domain_not_found(domain, e))?;
    if addrs.next().is_none() {
        return Err(CookieError::domain_not_found(
            domain,
            std::io::Error::new(std::io::ErrorKind::NotFound, "resolver returned no addresses"),
        ));
    }
    Ok(())
}

fn truncate_to_seconds(t: OffsetDateTime) -> OffsetDateTime {
    t - Duration::nanoseconds(i64::from(t.nanosecond()))
}

impl PartialEq for Cookie {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.name == other.name
    }
}

impl Eq for Cookie {}

impl Hash for Cookie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.domain.hash(state);
    }
}

/// Canonical debugging form: `name=value[;expires=...];path=...[;secure;]`.
///
/// This is not a `Set-Cookie` header and no escaping is applied.
impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(expiry) = self.expiry {
            let expires = expiry
                .to_offset(UtcOffset::UTC)
                .format(EXPIRES_FORMAT)
                .map_err(|_| fmt::Error)?;
            write!(f, ";expires={expires}")?;
        }
        write!(f, ";path={}", self.path)?;
        if self.secure {
            f.write_str(";secure;")?;
        }
        Ok(())
    }
}

/// Staged construction of a [`Cookie`].
///
/// Every attribute starts absent. `build*` normalizes the attributes, then
/// validates them; nothing is returned unless all checks pass.
///
/// ```rust
/// use webdriver_cookie::cookies::Cookie;
///
/// let cookie = Cookie::builder()
///     .name("session")
///     .value("abc123")
///     .domain("")
///     .secure(true)
///     .build()?;
/// assert_eq!(cookie.to_string(), "session=abc123;path=/;secure;");
/// # Ok::<(), webdriver_cookie::base::cookieerror::CookieError>(())
/// ```
#[derive(Clone, Default)]
pub struct CookieBuilder {
    name: Option<String>,
    value: Option<String>,
    domain: Option<String>,
    path: Option<String>,
    expiry: Option<OffsetDateTime>,
    secure: bool,
    resolver: Option<Arc<dyn HostResolver>>,
}

impl CookieBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Leaving the path unset, or setting it empty, yields `/`.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn expiry(mut self, expiry: impl Into<Option<OffsetDateTime>>) -> Self {
        self.expiry = expiry.into();
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Resolver used by [`build`](Self::build) and [`build_async`](Self::build_async).
    ///
    /// Defaults to [`GaiResolver`].
    pub fn resolver(mut self, resolver: Arc<dyn HostResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Validates with the configured resolver.
    pub fn build(self) -> Result<Cookie, CookieError> {
        let (cookie, resolver) = self.normalize()?;
        let result = match resolver {
            Some(resolver) => cookie.check_domain(&*resolver),
            None => cookie.check_domain(&GaiResolver),
        };
        finish(cookie, result)
    }

    /// Validates with `resolver`, ignoring any configured one.
    pub fn build_with(self, resolver: &dyn HostResolver) -> Result<Cookie, CookieError> {
        let (cookie, _) = self.normalize()?;
        let result = cookie.check_domain(resolver);
        finish(cookie, result)
    }

    /// Validates like [`build`](Self::build), running the blocking host
    /// lookup on tokio's blocking thread pool.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build_async(self) -> Result<Cookie, CookieError> {
        let (cookie, resolver) = self.normalize()?;
        let host = match cookie.resolvable_host() {
            Ok(Some(host)) => host,
            Ok(None) => return Ok(cookie),
            Err(e) => return finish(cookie, Err(e)),
        };

        let resolver = resolver.unwrap_or_else(|| Arc::new(GaiResolver) as Arc<dyn HostResolver>);
        let domain = cookie.domain.clone();
        let result =
            tokio::task::spawn_blocking(move || ensure_resolves(&domain, &host, &*resolver))
                .await
                .unwrap_or_else(|e| {
                    tracing::error!(error = %e, "host resolution task failed");
                    Err(CookieError::domain_not_found(
                        cookie.domain.as_str(),
                        std::io::Error::other(e),
                    ))
                });
        finish(cookie, result)
    }

    /// Applies normalization and the checks that need no resolver.
    fn normalize(self) -> Result<(Cookie, Option<Arc<dyn HostResolver>>), CookieError> {
        let CookieBuilder {
            name,
            value,
            domain,
            path,
            expiry,
            secure,
            resolver,
        } = self;

        let name = name.ok_or(CookieError::missing("name"))?;
        let value = value.ok_or(CookieError::missing("value"))?;
        let domain = domain.ok_or(CookieError::missing("domain"))?;

        if name.is_empty() {
            return Err(CookieError::missing("name"));
        }
        if name.contains(';') {
            tracing::debug!(name = %name, "rejected cookie name");
            return Err(CookieError::NameContainsSemicolon { name });
        }

        let cookie = Cookie {
            name,
            value,
            domain: domain.to_lowercase(),
            path: path.filter(|p| !p.is_empty()).unwrap_or_else(|| "/".to_string()),
            expiry: expiry.map(truncate_to_seconds),
            secure,
        };
        Ok((cookie, resolver))
    }
}

fn finish(cookie: Cookie, result: Result<(), CookieError>) -> Result<Cookie, CookieError> {
    match result {
        Ok(()) => Ok(cookie),
        Err(e) => {
            tracing::debug!(
                name = %cookie.name,
                domain = %cookie.domain,
                error = %e,
                "rejected cookie domain"
            );
            Err(e)
        }
    }
}

impl fmt::Debug for CookieBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieBuilder")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("domain", &self.domain)
            .field("path", &self.path)
            .field("expiry", &self.expiry)
            .field("secure", &self.secure)
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}
