use super::scan;

/// Domain: same grammar as the local part, and it must contain at least one
/// label boundary (`.` followed by a letter). Single-label domains fail.
pub fn validate_domain(s: &str) -> bool {
    let scan = scan(s);
    scan.well_formed && scan.label_boundaries > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_domain_ok() {
        assert!(validate_domain("example.com"));
        assert!(validate_domain("sub.example.co"));
        assert!(validate_domain("my-host.example.org"));
        assert!(validate_domain("a1.b"));
    }

    #[test]
    fn single_label_rejected() {
        assert!(!validate_domain("example"));
        assert!(!validate_domain("localhost"));
    }

    #[test]
    fn label_must_start_with_letter() {
        assert!(!validate_domain("example.2com"));
        assert!(!validate_domain("unsw.edu.1au"));
        assert!(!validate_domain("example..com"));
    }

    #[test]
    fn edges_must_be_letters() {
        assert!(!validate_domain(""));
        assert!(!validate_domain(".example.com"));
        assert!(!validate_domain("example.com."));
        assert!(!validate_domain("1example.com"));
        assert!(!validate_domain("example.com1"));
    }
}
