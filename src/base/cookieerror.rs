use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Invalid-argument failure raised while constructing a cookie.
///
/// Every variant is the same kind of error: an input attribute violated one
/// of the cookie invariants. The variant says which precondition failed.
#[derive(Debug, Error, Clone)]
pub enum CookieError {
    #[error("required attribute missing: {attribute}")]
    MissingAttribute { attribute: &'static str },
    #[error("cookie name contains ';': {name}")]
    NameContainsSemicolon { name: String },
    #[error("URL not valid: {domain}")]
    InvalidUrl { domain: String },
    #[error("domain does not exist: {domain}")]
    DomainNotFound {
        domain: String,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("expiry out of range: {secs}")]
    ExpiryOutOfRange { secs: i64 },
}

impl CookieError {
    pub fn missing(attribute: &'static str) -> Self {
        CookieError::MissingAttribute { attribute }
    }

    pub fn domain_not_found(domain: impl Into<String>, source: io::Error) -> Self {
        CookieError::DomainNotFound {
            domain: domain.into(),
            source: Arc::new(source),
        }
    }

    /// The domain string this error refers to, for the URL and resolution checks.
    pub fn domain(&self) -> Option<&str> {
        match self {
            CookieError::InvalidUrl { domain } | CookieError::DomainNotFound { domain, .. } => {
                Some(domain)
            }
            _ => None,
        }
    }
}

impl PartialEq for CookieError {
    fn eq(&self, other: &Self) -> bool {
        use CookieError::*;
        match (self, other) {
            (MissingAttribute { attribute: a }, MissingAttribute { attribute: b }) => a == b,
            (NameContainsSemicolon { name: a }, NameContainsSemicolon { name: b }) => a == b,
            (InvalidUrl { domain: a }, InvalidUrl { domain: b }) => a == b,
            // io::Error has no equality; the domain identifies the failure.
            (DomainNotFound { domain: a, .. }, DomainNotFound { domain: b, .. }) => a == b,
            (ExpiryOutOfRange { secs: a }, ExpiryOutOfRange { secs: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for CookieError {}
