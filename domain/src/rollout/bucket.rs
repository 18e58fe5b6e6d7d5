//! Percentage rollout buckets.
//!
//! Each page is assigned a stable bucket in `0..100` derived from its
//! rollout key (`"{namespace}:{db_key}"`):
//!
//! 1. md5 of the key
//! 2. first 8 hex digits read as an unsigned 32-bit integer
//! 3. masked to 31 bits
//! 4. reduced mod 100
//!
//! A page is inside a rollout of `p` percent when its bucket is below `p`.
//! The bucket depends only on namespace and DB key, never on revision or
//! content, so repeated decisions for a page agree and cached renders stay
//! consistent. Keys are joined with `:` without escaping, so two distinct
//! pages could in theory share a key; the exact hash is kept for
//! compatibility with existing bucket assignments.

use crate::page::identity::PageIdentity;
use md5::{Digest, Md5};

/// A percentage at or above this value disables bucketing entirely.
pub const FULL_ROLLOUT: u32 = 100;

const BUCKETS: u32 = 100;

/// First 8 hex digits of `md5(key)` as an integer.
pub fn hash_prefix(key: &str) -> u32 {
    let digest = Md5::digest(key.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Bucket in `0..100` for a rollout key.
pub fn bucket_for_key(key: &str) -> u32 {
    (hash_prefix(key) & 0x7fff_ffff) % BUCKETS
}

/// Bucket in `0..100` for a page.
pub fn rollout_bucket(page: &PageIdentity) -> u32 {
    bucket_for_key(&page.rollout_key())
}

/// Whether `page` falls inside a rollout of `percentage` percent.
///
/// Percentages of 100 or more admit every page without hashing.
pub fn admits(percentage: u32, page: &PageIdentity) -> bool {
    if percentage >= FULL_ROLLOUT {
        return true;
    }
    rollout_bucket(page) < percentage
}
