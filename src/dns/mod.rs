//! Host Resolution Module
//!
//! Provides the pluggable resolution oracle used by cookie domain validation:
//! - System resolver (getaddrinfo)
//! - Offline resolver that knows no hosts
//! - Hostname-to-IP override mechanism
//!
//! # Architecture
//!
//! The `HostResolver` trait is the core abstraction. Cookie construction only
//! needs a pass/fail answer, so resolvers are synchronous and the addresses
//! they return are used solely to check that at least one exists.
//!
//! # Example
//!
//! ```rust,no_run
//! use webdriver_cookie::dns::{GaiResolver, HostResolver, Name};
//!
//! let addrs = GaiResolver::new().resolve(&Name::new("example.com"))?;
//! for addr in addrs {
//!     println!("Resolved: {}", addr);
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

mod gai;
mod resolve;

pub use gai::GaiResolver;
pub use resolve::{Addrs, DnsResolverWithOverrides, HostResolver, Name, OfflineResolver};
