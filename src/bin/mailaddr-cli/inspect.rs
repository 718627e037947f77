use mailaddr_lib::{EmailAddress, compare, domain_eq, domain_ne, hash, hash32, ordering};

/// Three-way result followed by every derived predicate, one per line.
pub fn compare_lines(a: &EmailAddress, b: &EmailAddress) -> Vec<String> {
    vec![
        format!("compare: {}", compare(a, b)),
        format!("lt: {}", ordering::lt(a, b)),
        format!("le: {}", ordering::le(a, b)),
        format!("eq: {}", ordering::eq(a, b)),
        format!("ne: {}", ordering::ne(a, b)),
        format!("ge: {}", ordering::ge(a, b)),
        format!("gt: {}", ordering::gt(a, b)),
        format!("domain_eq: {}", domain_eq(a, b)),
        format!("domain_ne: {}", domain_ne(a, b)),
    ]
}

pub fn hash_lines(email: &EmailAddress) -> Vec<String> {
    vec![
        email.to_string(),
        format!("hash: {:016x}", hash(email)),
        format!("hash32: {}", hash32(email)),
    ]
}
