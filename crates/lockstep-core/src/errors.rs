//! Invariant-violation errors for the strict collection operations.
//!
//! These two types are the library's only failure modes. Both report a broken
//! caller-side uniqueness assumption rather than an expected runtime
//! condition: the caller asserted "these inputs contain no duplicates" and
//! the input proved otherwise. Callers inside a replicated state machine
//! should abort the current unit of deterministic execution when one of these
//! surfaces; catching and continuing would let replicas diverge on the
//! suppressed path.

use std::fmt;

use thiserror::Error;

/// A sequence that was required to be duplicate-free contained a repeated
/// element.
///
/// Returned by [`slice_to_set`](crate::collections::slice_to_set). Carries
/// the first repeated value encountered in the left-to-right scan of the
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate value: {value:?}")]
pub struct DuplicateValueError<T: fmt::Debug> {
    /// The value that appeared more than once.
    pub value: T,
}

/// A key appeared in more than one input container during a strict merge.
///
/// Returned by
/// [`merge_maps_distinct_keys`](crate::collections::merge_maps_distinct_keys).
/// Carries the first colliding key, which is deterministic for fixed input
/// contents: containers are visited in argument order and keys within each
/// container in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate key: {key:?}")]
pub struct DuplicateKeyError<K: fmt::Debug> {
    /// The key that was present in more than one input container.
    pub key: K,
}
