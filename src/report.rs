use crate::address::{EmailAddress, parse};

/// Outcome of one parse attempt, kept whether or not the input was valid.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressReport {
    pub original: String,
    pub valid: bool,
    pub canonical: Option<String>,
    pub local: String,
    pub domain: String,
    pub reason: Option<String>,
}

impl AddressReport {
    fn accepted(original: &str, email: &EmailAddress) -> Self {
        Self {
            original: original.to_string(),
            valid: true,
            canonical: Some(email.to_canonical()),
            local: email.local().to_string(),
            domain: email.domain().to_string(),
            reason: None,
        }
    }
}

/// Parses `raw` and summarises the result instead of failing.
///
/// For rejected input the parts are a best-effort lowercase split on the
/// first `@`, so callers can still display what was seen.
pub fn check_address(raw: &str) -> AddressReport {
    match parse(raw) {
        Ok(email) => AddressReport::accepted(raw, &email),
        Err(err) => {
            let lowered = raw.to_ascii_lowercase();
            let (local, domain) = lowered.split_once('@').unwrap_or((lowered.as_str(), ""));
            AddressReport {
                original: raw.to_string(),
                valid: false,
                canonical: None,
                local: local.to_string(),
                domain: domain.to_string(),
                reason: Some(err.to_string()),
            }
        }
    }
}
