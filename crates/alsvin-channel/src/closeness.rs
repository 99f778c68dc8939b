//! Approximate equality of numeric maps.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Default relative tolerance.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-5;

/// Default absolute tolerance.
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Check that two maps have equal key sets and pairwise-close values,
/// under the default tolerances.
pub fn are_close_dicts<K, S>(a: &HashMap<K, f64, S>, b: &HashMap<K, f64, S>) -> bool
where
    K: Eq + Hash,
    S: BuildHasher,
{
    are_close_dicts_with(a, b, DEFAULT_RELATIVE_TOLERANCE, DEFAULT_ABSOLUTE_TOLERANCE)
}

/// Check that two maps have equal key sets and pairwise-close values.
///
/// Values `x` and `y` are close when `|x − y| ≤ atol + rtol·|y|`. A key
/// present in only one map makes the maps differ regardless of values.
pub fn are_close_dicts_with<K, S>(
    a: &HashMap<K, f64, S>,
    b: &HashMap<K, f64, S>,
    rtol: f64,
    atol: f64,
) -> bool
where
    K: Eq + Hash,
    S: BuildHasher,
{
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|(key, &va)| match b.get(key) {
        Some(&vb) => (va - vb).abs() <= atol + rtol * vb.abs(),
        None => false,
    })
}
