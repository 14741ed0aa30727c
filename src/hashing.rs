//! Key hashing and bucket selection.
//!
//! The hash is the sum of the key's Unicode scalar values. It is weak on
//! purpose: anagrams (and any permutation of the same characters) land in
//! the same bucket. Bucket placement and the layouts observed in tests
//! depend on this exact scheme, so it must not be swapped for a stronger
//! hasher.

/// Sum of the `char` scalar values of `key`.
#[inline]
pub fn hash(key: &str) -> u64 {
    key.chars().fold(0u64, |acc, c| acc.wrapping_add(c as u64))
}

/// Bucket index of `key` in a table of `bucket_count` buckets.
///
/// `bucket_count` is passed explicitly so a resize can compute placements
/// against the new size while still walking the old buckets.
#[inline]
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0, "bucket count must be positive");
    (hash(key) % bucket_count as u64) as usize
}
