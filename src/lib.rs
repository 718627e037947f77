#![forbid(unsafe_code)]
//! mailaddr_lib — strict `local@domain` value type: parse, canonical format,
//! total order and hash.

pub mod address;
mod report;
pub mod validator;

pub use address::{
    EmailAddress, MAX_LENGTH, ParseError, compare, domain_eq, domain_ne, format, hash, hash32,
    ordering, parse,
};
pub use report::{AddressReport, check_address};
pub use validator::{validate_domain, validate_local};
