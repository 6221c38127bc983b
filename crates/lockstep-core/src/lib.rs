//! Deterministic collection primitives for a replicated state machine.
//!
//! Every node in a replicated deployment must derive bit-identical state
//! from the same sequence of inputs. The standard unordered containers work
//! against that goal: [`std::collections::HashMap`] iteration order is
//! unspecified and seeded per process, so two nodes walking the same map
//! can observe different sequences. This crate provides the sanctioned
//! bridge between unordered containers and ordered computation, plus
//! strict-uniqueness constructors that surface contract violations as
//! typed errors instead of silently dropping or overwriting data.
//!
//! All operations are pure, synchronous functions over caller-owned data.
//! The crate holds no state and performs no I/O.

#![forbid(unsafe_code)]

// === Core Modules ===

/// Deterministic slice and map operations
pub mod collections;

/// Typed errors for uniqueness-contract violations
pub mod errors;

/// Composite account identifiers and their canonical ordering
pub mod identifiers;

// === Public API Re-exports ===

// Generic deterministic operations
pub use collections::{
    contains_duplicates, dedupe_slice, filter_slice, map_slice, merge_maps_distinct_keys,
    slice_to_set, sorted_entries, sorted_keys,
};

// Errors
pub use errors::{DuplicateKeyError, DuplicateValueError};

// Identifiers and ordering
pub use identifiers::{account_key_compare, sort_account_keys, AccountKey};
