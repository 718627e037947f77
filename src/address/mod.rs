//! The [`EmailAddress`] value object: parsing, canonical formatting,
//! ordering and hashing.

mod error;
pub mod ordering;

use std::fmt;
use std::str::FromStr;

pub use error::ParseError;
pub use ordering::{compare, domain_eq, domain_ne, hash, hash32};

use crate::validator::{validate_domain, validate_local};

/// Longest accepted raw input, in bytes (SMTP path limit).
pub const MAX_LENGTH: usize = 254;

/// A validated, lowercased `local@domain` address.
///
/// Only obtainable through [`parse`] (or the conversions that call it), so
/// both parts always satisfy the validator grammar.
#[derive(Debug, Clone)]
pub struct EmailAddress {
    local: String,
    domain: String,
}

impl EmailAddress {
    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Canonical `local@domain` text.
    pub fn to_canonical(&self) -> String {
        format(self)
    }
}

/// Parses `raw` into an [`EmailAddress`].
///
/// The input is lowercased into a fresh buffer, split on its single `@`, and
/// both halves are validated. `raw` itself is never modified.
pub fn parse(raw: &str) -> Result<EmailAddress, ParseError> {
    if raw.len() > MAX_LENGTH {
        return Err(ParseError::too_long(raw.len()));
    }

    let lowered = raw.to_ascii_lowercase();
    let (local, domain) = match lowered.split_once('@') {
        None => return Err(ParseError::MissingSeparator),
        Some((_, domain)) if domain.contains('@') => {
            return Err(ParseError::MultipleSeparators);
        }
        Some(parts) => parts,
    };

    if local.is_empty() {
        return Err(ParseError::EmptyLocal);
    }
    if domain.is_empty() {
        return Err(ParseError::EmptyDomain);
    }

    if !(validate_local(local) && validate_domain(domain)) {
        return Err(ParseError::InvalidSyntax(raw.to_string()));
    }

    Ok(EmailAddress {
        local: local.to_string(),
        domain: domain.to_string(),
    })
}

/// Renders `email` as `local@domain`.
pub fn format(email: &EmailAddress) -> String {
    let mut out = String::with_capacity(email.local.len() + 1 + email.domain.len());
    out.push_str(&email.local);
    out.push('@');
    out.push_str(&email.domain);
    out
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

impl FromStr for EmailAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        format(&email)
    }
}

#[cfg(feature = "with-serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "with-serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
