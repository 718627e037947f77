use thiserror::Error;

/// Why a raw string could not become an [`EmailAddress`](super::EmailAddress).
///
/// Every variant is a permanent property of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input length {len} exceeds maximum of {max} bytes")]
    TooLong { len: usize, max: usize },
    #[error("missing '@' separator")]
    MissingSeparator,
    #[error("more than one '@' separator")]
    MultipleSeparators,
    #[error("local part is empty")]
    EmptyLocal,
    #[error("domain part is empty")]
    EmptyDomain,
    /// Carries the input as received, before lowercasing.
    #[error("invalid input syntax for email: \"{0}\"")]
    InvalidSyntax(String),
}

impl ParseError {
    pub(crate) fn too_long(len: usize) -> Self {
        Self::TooLong {
            len,
            max: super::MAX_LENGTH,
        }
    }
}
