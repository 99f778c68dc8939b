//! Structural circuit equality under configurable relaxations.
//!
//! By default two circuits compare equal up to qubit relabeling and
//! measurement-key differences; either relaxation can be switched off.
//! The comparison itself is delegated to the canonical dependency DAG,
//! so moment alignment never influences the verdict.

use crate::circuit::Circuit;
use crate::dag::CircuitDag;
use crate::qubit::QubitId;
use rustc_hash::FxHashMap;

/// Knobs controlling how strictly two circuits are compared.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualityOptions {
    /// Require the two circuits to act on identical qubits.
    pub require_qubit_equality: bool,
    /// Require measurement keys to match.
    pub require_measurement_equality: bool,
}

/// Check circuit equality with both relaxations enabled.
///
/// Equivalent to [`circuits_equal_with`] with default options: qubit
/// identities and measurement keys are both ignored.
pub fn circuits_equal(a: &Circuit, b: &Circuit) -> bool {
    circuits_equal_with(a, b, &EqualityOptions::default())
}

/// Check circuit equality under the given options.
///
/// When qubit equality is relaxed, the i-th smallest qubit of `a` is
/// paired with the i-th smallest qubit of `b`; circuits with different
/// qubit-set cardinalities have no such pairing and compare unequal.
/// When measurement equality is relaxed, every measurement key is
/// erased (position preserved) on both sides before comparing.
///
/// Neither input circuit is ever mutated: all transformations construct
/// fresh circuit values.
pub fn circuits_equal_with(a: &Circuit, b: &Circuit, options: &EqualityOptions) -> bool {
    // Self-comparison needs no deep work.
    if std::ptr::eq(a, b) {
        return true;
    }

    let mut lhs = a.clone();
    let mut rhs = b.clone();

    if !options.require_qubit_equality {
        if lhs.num_qubits() != rhs.num_qubits() {
            // No bijection between the qubit sets exists; the remapping
            // is undefined, so the circuits are simply not equal.
            return false;
        }
        let map: FxHashMap<QubitId, QubitId> = lhs
            .all_qubits()
            .zip(rhs.all_qubits())
            .collect();
        match lhs.transform_qubits(|q| map[&q]) {
            Ok(mapped) => lhs = mapped,
            // A zip of two equal-size sorted sets is bijective; an
            // injectivity failure here would mean a broken qubit order.
            Err(_) => return false,
        }
    }

    if !options.require_measurement_equality {
        lhs = lhs.with_measurement_keys_erased();
        rhs = rhs.with_measurement_keys_erased();
    }

    CircuitDag::from_circuit(&lhs) == CircuitDag::from_circuit(&rhs)
}
