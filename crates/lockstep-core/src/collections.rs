//! Deterministic operations over slices and unordered keyed containers.
//!
//! Replicated state machines must compute bit-identical results on every
//! node, but the iteration order of [`HashMap`] and [`HashSet`] is
//! unspecified and the default hasher is seeded per process. These helpers
//! are the sanctioned way to move between unordered containers and ordered
//! sequences when the result feeds consensus-relevant computation (hashing,
//! event emission, validation): keys are always extracted and sorted before
//! iteration, and operations that assume uniqueness fail loudly instead of
//! silently overwriting.
//!
//! Every operation here is a pure, synchronous function over caller-owned
//! data. Nothing is retained between calls and nothing performs I/O.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::errors::{DuplicateKeyError, DuplicateValueError};

/// Returns true if `values` contains the same value more than once.
///
/// Empty and all-distinct inputs return false. Builds a transient seen-set
/// internally and short-circuits on the first repeat; the input is not
/// modified.
pub fn contains_duplicates<T>(values: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().any(|value| !seen.insert(value))
}

/// Extracts every key of `map` in ascending order.
///
/// This is the only sanctioned way to iterate a [`HashMap`]'s keys when the
/// result feeds deterministic computation: iterating the map directly leaks
/// its unspecified bucket order, which differs from process to process.
///
/// An empty map yields an empty `Vec`, never an absent value.
pub fn sorted_keys<K, V>(map: &HashMap<K, V>) -> Vec<K>
where
    K: Ord + Clone,
{
    let mut keys: Vec<K> = map.keys().cloned().collect();
    keys.sort_unstable();
    keys
}

/// Extracts every `(key, value)` entry of `map`, ordered ascending by key.
///
/// The entry-wise companion of [`sorted_keys`] for callers that hash or emit
/// whole entries rather than keys alone. Keys are unique within a map, so
/// the resulting order is fully determined by the map's contents.
pub fn sorted_entries<K, V>(map: &HashMap<K, V>) -> Vec<(K, V)>
where
    K: Ord + Clone,
    V: Clone,
{
    let mut entries: Vec<(K, V)> = map
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    entries
}

/// Applies `f` to every element of `values`, producing a new `Vec`.
///
/// Output length equals input length, `out[i] == f(&values[i])`, and
/// relative order is preserved; the output type may differ from the input
/// type. For the determinism guarantees of this crate to hold, `f` must be
/// total and side-effect-free — a caller contract, not a runtime check.
pub fn map_slice<A, B, F>(values: &[A], f: F) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    values.iter().map(f).collect()
}

/// Returns the elements of `values` satisfying `predicate`, in input order.
///
/// An always-true predicate yields a clone of the input; an always-false
/// predicate or empty input yields an empty `Vec`.
pub fn filter_slice<T, F>(values: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    values
        .iter()
        .filter(|value| predicate(value))
        .cloned()
        .collect()
}

/// De-duplicates `values`, keeping the first occurrence of each distinct
/// value in first-seen order.
///
/// The tolerant counterpart of [`slice_to_set`]: repeats are expected here
/// and dropped, not treated as a contract violation.
pub fn dedupe_slice<T>(values: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

/// Builds a set from `values`, requiring every element to be distinct.
///
/// Asserting uniqueness is the whole point of this operation: a repeated
/// element means an upstream invariant broke, so the first repeat in the
/// left-to-right scan is reported as a [`DuplicateValueError`] instead of
/// being silently dropped. Callers should treat the error as unrecoverable
/// within the current unit of deterministic execution.
pub fn slice_to_set<T>(values: &[T]) -> Result<HashSet<T>, DuplicateValueError<T>>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    let mut set = HashSet::with_capacity(values.len());
    for value in values {
        if !set.insert(value.clone()) {
            tracing::error!("duplicate value in strict set construction: {:?}", value);
            return Err(DuplicateValueError {
                value: value.clone(),
            });
        }
    }
    Ok(set)
}

/// Merges `maps` into one, requiring keys to be pairwise distinct across
/// containers.
///
/// Keys are already unique within each input map by construction, so only
/// cross-container collisions are possible. On success the result is the
/// union of all entries. The first collision is reported as a
/// [`DuplicateKeyError`]; "first" is deterministic for fixed input contents
/// because containers are visited in argument order and keys within each
/// container in ascending order, never in `HashMap` iteration order.
///
/// Zero input maps, or all-empty input maps, produce an empty result.
pub fn merge_maps_distinct_keys<K, V>(
    maps: Vec<HashMap<K, V>>,
) -> Result<HashMap<K, V>, DuplicateKeyError<K>>
where
    K: Ord + Hash + fmt::Debug,
{
    let capacity: usize = maps.iter().map(HashMap::len).sum();
    let mut merged = HashMap::with_capacity(capacity);
    for map in maps {
        let mut entries: Vec<(K, V)> = map.into_iter().collect();
        // Ascending key order keeps the reported collision deterministic.
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        for (key, value) in entries {
            if merged.contains_key(&key) {
                tracing::error!("duplicate key across merged containers: {:?}", key);
                return Err(DuplicateKeyError { key });
            }
            merged.insert(key, value);
        }
    }
    Ok(merged)
}
