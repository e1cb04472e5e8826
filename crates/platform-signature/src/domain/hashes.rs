//! # Hash Inputs
//!
//! Parsing of the caller-supplied hash set.
//!
//! ## Layout
//!
//! | Index | Meaning | Width |
//! |-------|---------|-------|
//! | 0 | location hash seeded by the auth token | 32 bits |
//! | 1 | location hash | 32 bits |
//! | 2.. | one hash per sub-request, in envelope order | 64 bits |
//!
//! ## Numeric Semantics
//!
//! Entries are arbitrary-precision decimal integers. Narrowing keeps the low
//! bits of the two's-complement value, so `"2147483648"` becomes `i32::MIN`
//! and `"18446744073709551615"` becomes `u64::MAX`. Saturating or checked
//! conversion would produce different wire bytes.

use super::errors::HashInputError;

/// Index of the token-seeded location hash.
pub const LOCATION_HASH_BY_TOKEN_SEED_INDEX: usize = 0;

/// Index of the location hash.
pub const LOCATION_HASH_INDEX: usize = 1;

/// Index of the first per-request hash.
pub const FIRST_REQUEST_HASH_INDEX: usize = 2;

/// Parse a decimal integer of any magnitude and keep its low 64 bits.
///
/// Accepts an optional leading `+` or `-` followed by at least one ASCII
/// digit. Anything else, including surrounding whitespace, is rejected.
pub fn parse_wrapping_u64(value: &str) -> Option<u64> {
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    if digits.is_empty() {
        return None;
    }

    let mut acc: u64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        // Arithmetic modulo 2^64 keeps exactly the low 64 bits of the value
        acc = acc.wrapping_mul(10).wrapping_add(u64::from(byte - b'0'));
    }

    Some(if negative { acc.wrapping_neg() } else { acc })
}

/// Parse a decimal integer of any magnitude and keep its low 32 bits as a
/// signed value.
pub fn parse_wrapping_i32(value: &str) -> Option<i32> {
    parse_wrapping_u64(value).map(|v| v as u32 as i32)
}

/// Borrowed view over the caller's hash set.
#[derive(Debug, Clone, Copy)]
pub struct HashInputs<'a, S> {
    hashes: &'a [S],
}

impl<'a, S: AsRef<str>> HashInputs<'a, S> {
    /// Wrap a hash set.
    pub fn new(hashes: &'a [S]) -> Self {
        Self { hashes }
    }

    /// Number of entries supplied by the caller.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Whether the caller supplied no entries at all.
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Number of entries required for an envelope with `sub_request_count`
    /// sub-requests.
    pub fn required_len(sub_request_count: usize) -> usize {
        FIRST_REQUEST_HASH_INDEX + sub_request_count
    }

    /// Token-seeded location hash, truncated to 32 bits.
    pub fn location_hash_by_token_seed(&self) -> Result<i32, HashInputError> {
        self.parse_i32(LOCATION_HASH_BY_TOKEN_SEED_INDEX)
    }

    /// Location hash, truncated to 32 bits.
    pub fn location_hash(&self) -> Result<i32, HashInputError> {
        self.parse_i32(LOCATION_HASH_INDEX)
    }

    /// Per-request hashes for the first `sub_request_count` sub-requests.
    ///
    /// Entries beyond the sub-request count are ignored. Parsing stops at the
    /// first bad entry; no partial list is returned.
    ///
    /// Every supplied entry is parsed before the length is checked, so a short
    /// set with a bad entry reports `Malformed`, never `Missing`.
    pub fn request_hashes(&self, sub_request_count: usize) -> Result<Vec<u64>, HashInputError> {
        let required = Self::required_len(sub_request_count);
        let available = self.hashes.len().min(required);

        let parsed = (FIRST_REQUEST_HASH_INDEX..available)
            .map(|index| {
                parse_wrapping_u64(self.hashes[index].as_ref())
                    .ok_or(HashInputError::Malformed { index })
            })
            .collect::<Result<Vec<u64>, HashInputError>>()?;

        if self.hashes.len() < required {
            return Err(HashInputError::Missing {
                expected: required,
                actual: self.hashes.len(),
            });
        }

        Ok(parsed)
    }

    fn parse_i32(&self, index: usize) -> Result<i32, HashInputError> {
        let raw = self.hashes.get(index).ok_or(HashInputError::Missing {
            expected: index + 1,
            actual: self.hashes.len(),
        })?;
        parse_wrapping_i32(raw.as_ref()).ok_or(HashInputError::Malformed { index })
    }
}
