//! The cookie value type.
//!
//! This module provides an immutable, eagerly validated cookie as seen by
//! browser automation code:
//!
//! - **Value type**: [`Cookie`](canonicalcookie::Cookie), validated once at
//!   construction and never mutated afterwards
//! - **Construction**: [`CookieBuilder`](canonicalcookie::CookieBuilder),
//!   blocking or async, with an injectable host resolver
//! - **Serialization**: [`CookieRecord`](record::CookieRecord) for debugging
//!   dumps; deserializing re-validates
//!
//! # Construction
//!
//! ```rust
//! use webdriver_cookie::cookies::Cookie;
//! use webdriver_cookie::dns::OfflineResolver;
//!
//! // An empty domain is never looked up.
//! let cookie = Cookie::with_resolver("id", "1", "", "", None, true, &OfflineResolver)?;
//! assert_eq!(cookie.path(), "/");
//! assert_eq!(cookie.to_string(), "id=1;path=/;secure;");
//! # Ok::<(), webdriver_cookie::base::cookieerror::CookieError>(())
//! ```
//!
//! # Identity
//!
//! Cookies compare and hash by `(name, domain)` only, so a `HashSet<Cookie>`
//! holds at most one cookie per name and domain:
//!
//! ```rust
//! use std::collections::HashSet;
//! use webdriver_cookie::cookies::Cookie;
//! use webdriver_cookie::dns::OfflineResolver;
//!
//! let first = Cookie::with_resolver("id", "1", "", "/", None, false, &OfflineResolver)?;
//! let second = Cookie::with_resolver("id", "2", "", "/a", None, true, &OfflineResolver)?;
//!
//! let set: HashSet<_> = [first, second].into_iter().collect();
//! assert_eq!(set.len(), 1);
//! # Ok::<(), webdriver_cookie::base::cookieerror::CookieError>(())
//! ```

pub mod canonicalcookie;
pub mod record;

pub use canonicalcookie::{Cookie, CookieBuilder};
pub use record::CookieRecord;
