//! Gate-exponent normalization.

use crate::circuit::Circuit;
use crate::gate::Gate;

/// Return the gate with its exponent simplified to 1 when the gate at
/// exponent 1 realizes the same quantum channel.
///
/// Gates that cannot be reconstructed at an arbitrary exponent (fixed
/// unitaries, measurements, noise channels) are returned unchanged. The
/// input is never mutated.
pub fn simplify_gate_exponent(gate: &Gate) -> Gate {
    match gate.with_exponent(1.0) {
        Some(unit) if unit == *gate => unit,
        _ => gate.clone(),
    }
}

/// Rebuild a circuit with every gate exponent simplified where possible.
///
/// Moment structure and operation order are preserved exactly; a new
/// circuit value is returned and the input is left untouched.
#[must_use]
pub fn simplify_circuit_exponents(circuit: &Circuit) -> Circuit {
    circuit.map_gates(simplify_gate_exponent)
}
