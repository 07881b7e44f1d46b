//! Core host resolution types and traits.
//!
//! This module defines the `HostResolver` trait used by cookie construction
//! to decide whether a domain exists, plus the supporting `Name` type.

use std::{borrow::Cow, collections::HashMap, fmt, io, net::SocketAddr, sync::Arc};

/// Host part of a cookie domain, as handed to a [`HostResolver`].
///
/// Built from the host component of the domain's URL, so it is already
/// lowercased and IDNA-encoded.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Name {
    host: Box<str>,
}

impl Name {
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// Alias for an `Iterator` trait object over `SocketAddr`.
pub type Addrs = Box<dyn Iterator<Item = SocketAddr> + Send>;

/// Pass/fail oracle deciding whether a host name exists.
///
/// Cookie construction calls [`resolve`](HostResolver::resolve) once for a
/// non-empty, non-IP-literal domain. Any error, or an empty address list,
/// means the domain does not exist.
///
/// Resolution is blocking. Implementations must be thread-safe so that one
/// resolver can back cookies built on many threads.
pub trait HostResolver: Send + Sync {
    /// Resolves a host name to socket addresses with port 0.
    fn resolve(&self, name: &Name) -> io::Result<Addrs>;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<R: HostResolver + ?Sized> HostResolver for Arc<R> {
    fn resolve(&self, name: &Name) -> io::Result<Addrs> {
        (**self).resolve(name)
    }
}

/// Resolver that knows no hosts at all.
///
/// Every lookup fails with [`io::ErrorKind::NotFound`]. Combined with
/// [`DnsResolverWithOverrides`] it gives a fully offline resolver where only
/// the overridden names exist.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineResolver;

impl HostResolver for OfflineResolver {
    fn resolve(&self, name: &Name) -> io::Result<Addrs> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("offline resolver has no entry for {name}"),
        ))
    }
}

/// Resolver wrapper that supports hostname overrides.
///
/// This resolver first checks a map of hostname-to-address overrides before
/// falling back to the underlying resolver. Useful for:
/// - Testing without real DNS
/// - Accepting cookies for hosts that only exist inside a test harness
///
/// # Example
///
/// ```rust
/// use webdriver_cookie::dns::{DnsResolverWithOverrides, OfflineResolver};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// let mut overrides = HashMap::new();
/// overrides.insert("app.local".into(), vec!["127.0.0.1:0".parse().unwrap()]);
///
/// let resolver = DnsResolverWithOverrides::new(Arc::new(OfflineResolver), overrides);
/// assert_eq!(resolver.override_count(), 1);
/// ```
pub struct DnsResolverWithOverrides {
    inner: Arc<dyn HostResolver>,
    overrides: Arc<HashMap<Cow<'static, str>, Vec<SocketAddr>>>,
}

impl DnsResolverWithOverrides {
    /// Creates a new resolver with the given overrides.
    ///
    /// # Arguments
    ///
    /// * `inner` - The fallback resolver for non-overridden hostnames.
    /// * `overrides` - Map of hostnames to their resolved addresses.
    pub fn new(
        inner: Arc<dyn HostResolver>,
        overrides: HashMap<Cow<'static, str>, Vec<SocketAddr>>,
    ) -> Self {
        Self {
            inner,
            overrides: Arc::new(overrides),
        }
    }

    /// Returns the number of configured overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl HostResolver for DnsResolverWithOverrides {
    fn resolve(&self, name: &Name) -> io::Result<Addrs> {
        if let Some(addrs) = self.overrides.get(name.as_str()) {
            tracing::trace!(host = %name, "resolver override hit");
            return Ok(Box::new(addrs.clone().into_iter()));
        }
        self.inner.resolve(name)
    }
}

impl fmt::Debug for DnsResolverWithOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsResolverWithOverrides")
            .field("override_count", &self.overrides.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_name_as_str() {
        let name = Name::new("example.com");
        assert_eq!(name.as_str(), "example.com");
        assert_eq!(name.to_string(), "example.com");
    }

    #[test]
    fn test_name_equality() {
        let name1 = Name::new("example.com");
        let name2 = Name::new(String::from("example.com"));
        let name3 = Name::new("other.com");

        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
    }

    struct MockResolver {
        response: Vec<SocketAddr>,
    }

    impl HostResolver for MockResolver {
        fn resolve(&self, _name: &Name) -> io::Result<Addrs> {
            Ok(Box::new(self.response.clone().into_iter()))
        }
    }

    #[test]
    fn test_offline_resolver_rejects() {
        let err = OfflineResolver.resolve(&Name::new("example.com")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_override_resolver_hit() {
        let mock = Arc::new(MockResolver {
            response: vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 0)],
        });

        let mut overrides = HashMap::new();
        overrides.insert(
            Cow::Borrowed("override.local"),
            vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0)],
        );

        let resolver = DnsResolverWithOverrides::new(mock, overrides);
        let addrs: Vec<_> = resolver
            .resolve(&Name::new("override.local"))
            .unwrap()
            .collect();

        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn test_override_resolver_miss() {
        let mock = Arc::new(MockResolver {
            response: vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 0)],
        });

        let resolver = DnsResolverWithOverrides::new(mock, HashMap::new());
        let addrs: Vec<_> = resolver
            .resolve(&Name::new("not-overridden.com"))
            .unwrap()
            .collect();

        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].ip(), IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)));
    }

    #[test]
    fn test_override_over_offline() {
        let mut overrides = HashMap::new();
        overrides.insert(
            Cow::Borrowed("app.local"),
            vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)],
        );
        let resolver = DnsResolverWithOverrides::new(Arc::new(OfflineResolver), overrides);

        assert!(resolver.resolve(&Name::new("app.local")).is_ok());
        assert!(resolver.resolve(&Name::new("other.local")).is_err());
        assert_eq!(
            format!("{resolver:?}"),
            "DnsResolverWithOverrides { override_count: 1, .. }"
        );
    }
}
