//! Incremental rollout bucketing.

pub mod bucket;

pub use bucket::{FULL_ROLLOUT, admits, bucket_for_key, hash_prefix, rollout_bucket};
