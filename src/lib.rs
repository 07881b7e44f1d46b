//! # webdriver-cookie
//!
//! An immutable HTTP cookie value type for browser automation tooling.
//!
//! A [`Cookie`](cookies::Cookie) holds the attributes of one cookie set or
//! sent during a browser session. It is validated once, when it is built,
//! and is read-only afterwards.
//!
//! ## Features
//!
//! - **Eager validation**: non-empty `;`-free names, lowercase domains,
//!   `/` as the default path, expiry truncated to whole seconds
//! - **Domain check**: non-empty domains must resolve as a host, through a
//!   pluggable [`HostResolver`](dns::HostResolver)
//! - **Identity**: equality and hashing by name and domain only
//! - **Debug form**: `name=value;expires=...;path=...;secure;`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webdriver_cookie::cookies::Cookie;
//!
//! let cookie = Cookie::new("session", "abc123", "Example.com", "", None, true)?;
//! assert_eq!(cookie.domain(), "example.com");
//! println!("{cookie}");
//! # Ok::<(), webdriver_cookie::base::cookieerror::CookieError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`cookies`] - The cookie value type, builder and serde record
//! - [`dns`] - Host resolvers used by the domain check
//!
//! No parsing of `Set-Cookie` headers, cookie storage or domain matching is
//! done here; those belong to the cookie jar that consumes these values.

pub mod base;
pub mod cookies;
pub mod dns;
