//! Total order, equality and hashing for [`EmailAddress`].
//!
//! [`compare`] is the only comparison routine; every relational predicate and
//! the `PartialEq`/`Ord` impls wrap it, so a sorted index built on any of them
//! sees one consistent order.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::EmailAddress;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn cmp_internal(a: &EmailAddress, b: &EmailAddress) -> Ordering {
    a.local
        .as_bytes()
        .cmp(b.local.as_bytes())
        .then_with(|| a.domain.as_bytes().cmp(b.domain.as_bytes()))
}

/// Three-way comparison: local part first, then domain, bytewise.
/// Returns `-1`, `0` or `1`.
pub fn compare(a: &EmailAddress, b: &EmailAddress) -> i32 {
    cmp_internal(a, b) as i32
}

pub fn lt(a: &EmailAddress, b: &EmailAddress) -> bool {
    compare(a, b) < 0
}

pub fn le(a: &EmailAddress, b: &EmailAddress) -> bool {
    compare(a, b) <= 0
}

pub fn eq(a: &EmailAddress, b: &EmailAddress) -> bool {
    compare(a, b) == 0
}

pub fn ne(a: &EmailAddress, b: &EmailAddress) -> bool {
    compare(a, b) != 0
}

pub fn ge(a: &EmailAddress, b: &EmailAddress) -> bool {
    compare(a, b) >= 0
}

pub fn gt(a: &EmailAddress, b: &EmailAddress) -> bool {
    compare(a, b) > 0
}

/// Same domain, whatever the local parts.
pub fn domain_eq(a: &EmailAddress, b: &EmailAddress) -> bool {
    a.domain == b.domain
}

pub fn domain_ne(a: &EmailAddress, b: &EmailAddress) -> bool {
    a.domain != b.domain
}

/// 64-bit FNV-1a of the canonical `local@domain` text.
pub fn hash(email: &EmailAddress) -> u64 {
    let mut h = FNV_OFFSET_BASIS;
    for part in [email.local.as_bytes(), b"@", email.domain.as_bytes()] {
        for &byte in part {
            h ^= u64::from(byte);
            h = h.wrapping_mul(FNV_PRIME);
        }
    }
    h
}

/// [`hash`] folded into 32 bits, for hosts that store a signed int32.
pub fn hash32(email: &EmailAddress) -> i32 {
    let h = hash(email);
    (h ^ (h >> 32)) as u32 as i32
}

impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        eq(self, other)
    }
}

impl Eq for EmailAddress {}

impl PartialOrd for EmailAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EmailAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other).cmp(&0)
    }
}

impl Hash for EmailAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash(self));
    }
}
