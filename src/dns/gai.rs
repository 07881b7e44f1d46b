//! System host resolver using getaddrinfo.
//!
//! This resolver uses the operating system's native name resolution via
//! `getaddrinfo`, so it respects /etc/hosts, /etc/resolv.conf and friends.
//! It is the default resolver for cookie construction.

use super::{Addrs, HostResolver, Name};
use std::{
    io,
    net::{SocketAddr, ToSocketAddrs},
};

/// System host resolver backed by `getaddrinfo`.
///
/// This resolver wraps the standard library's `ToSocketAddrs` trait and
/// blocks the calling thread for the duration of the lookup. Async callers
/// should go through [`CookieBuilder::build_async`](crate::cookies::CookieBuilder::build_async),
/// which moves the call onto tokio's blocking pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }
}

impl HostResolver for GaiResolver {
    fn resolve(&self, name: &Name) -> io::Result<Addrs> {
        tracing::debug!(host = %name, "resolving via getaddrinfo");

        let addrs: Vec<SocketAddr> = (name.as_str(), 0u16)
            .to_socket_addrs()
            .inspect_err(|e| {
                tracing::debug!(host = %name, error = %e, "host resolution failed");
            })?
            .collect();

        if addrs.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No addresses returned by getaddrinfo",
            ));
        }

        tracing::debug!(host = %name, count = addrs.len(), "host resolution complete");
        Ok(Box::new(addrs.into_iter()))
    }
}
