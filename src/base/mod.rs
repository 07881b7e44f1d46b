//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): the invalid-argument error
//!   raised by cookie construction

pub mod cookieerror;
