use super::scan;

/// Local part: starts and ends with a letter, holds only letters, digits,
/// `.` and `-`, and each `.` is followed by a letter.
pub fn validate_local(s: &str) -> bool {
    scan(s).well_formed
}
