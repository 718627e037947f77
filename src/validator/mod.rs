//! Grammar checks for the two halves of an address.
//!
//! Both checks run on input that is already lowercased and never allocate.
//! They share [`scan`] so the local-part and domain grammars stay identical
//! apart from the label-boundary requirement of the domain.

mod domain;
mod local;

pub use domain::validate_domain;
pub use local::validate_local;

/// Letters, digits, `.` and `-` are the only characters either part may hold.
pub(crate) fn is_letter_digit_dot_dash(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'.' || c == b'-'
}

/// Result of walking one part of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scan {
    pub well_formed: bool,
    pub label_boundaries: usize,
}

impl Scan {
    const REJECTED: Scan = Scan {
        well_formed: false,
        label_boundaries: 0,
    };
}

/// Walks `s` once, checking first/last letter, the character class, and that
/// every `.` is followed by a letter. Counts label boundaries on the way.
pub(crate) fn scan(s: &str) -> Scan {
    let bytes = s.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return Scan::REJECTED;
    };
    if !first.is_ascii_alphabetic() || !last.is_ascii_alphabetic() {
        return Scan::REJECTED;
    }

    let mut label_boundaries = 0;
    for (idx, &c) in bytes.iter().enumerate() {
        if !is_letter_digit_dot_dash(c) {
            return Scan::REJECTED;
        }
        if c == b'.' {
            match bytes.get(idx + 1) {
                Some(next) if next.is_ascii_alphabetic() => label_boundaries += 1,
                _ => return Scan::REJECTED,
            }
        }
    }

    Scan {
        well_formed: true,
        label_boundaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_predicate() {
        for c in b"az09.-".iter() {
            assert!(is_letter_digit_dot_dash(*c), "{}", *c as char);
        }
        for c in b"@_+ \t\"".iter() {
            assert!(!is_letter_digit_dot_dash(*c), "{}", *c as char);
        }
        assert!(!is_letter_digit_dot_dash(0xc3));
    }

    #[test]
    fn scan_counts_boundaries() {
        assert_eq!(
            scan("mail.sub.example.com"),
            Scan {
                well_formed: true,
                label_boundaries: 3
            }
        );
        assert_eq!(scan("localhost").label_boundaries, 0);
        assert!(scan("localhost").well_formed);
    }

    #[test]
    fn scan_rejects_on_bad_input() {
        assert_eq!(scan(""), Scan::REJECTED);
        assert_eq!(scan("a.1b"), Scan::REJECTED);
        assert_eq!(scan("a..b"), Scan::REJECTED);
        assert_eq!(scan("a.-b"), Scan::REJECTED);
        assert_eq!(scan("é.com"), Scan::REJECTED);
    }
}
