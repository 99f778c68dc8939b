//! Choi-matrix construction via channel-state duality.

use std::collections::BTreeMap;

use alsvin_ir::{Circuit, Operation, QubitId};
use alsvin_sim::{DensityMatrix, Simulator};

use crate::entangle::max_entangled_state_circuit;
use crate::error::ChannelResult;

/// The density matrix of the Choi state associated to a circuit.
///
/// The circuit's channel is applied to one half of a maximally
/// entangled state: for an `n`-qubit circuit, a `2n`-qubit register is
/// prepared in `|ω⟩` and the circuit acts on the input half
/// (qubits `0..n` after remapping the circuit's sorted qubits onto the
/// input register). The resulting `2^(2n) × 2^(2n)` density matrix
/// completely characterizes the channel induced by the circuit,
/// including the effect of any noise operations it contains.
///
/// Only 1- and 2-qubit circuits are supported — larger registers fail
/// through the entangled-state preparer's size check.
pub fn circuit_to_choi<S: Simulator>(
    simulator: &S,
    circuit: &Circuit,
) -> ChannelResult<DensityMatrix> {
    let num_qubits = circuit.num_qubits();

    let input_register: BTreeMap<QubitId, QubitId> = circuit
        .all_qubits()
        .zip((0..num_qubits).map(QubitId::from))
        .collect();
    let remapped = circuit.transform_qubits(|q| input_register.get(&q).copied().unwrap_or(q))?;

    // Same qubit domain as the (remapped) input, operations cleared.
    let mut full = remapped.cleared();
    full.append_circuit(&max_entangled_state_circuit(2 * num_qubits)?);
    full.append_circuit(&remapped);

    Ok(simulator.simulate(&full)?)
}

/// The density matrix of the Choi state associated to an operation
/// sequence.
///
/// The operations are packed into a circuit and delegated to
/// [`circuit_to_choi`].
pub fn operations_to_choi<S: Simulator>(
    simulator: &S,
    operations: impl IntoIterator<Item = Operation>,
) -> ChannelResult<DensityMatrix> {
    let mut circuit = Circuit::new();
    for op in operations {
        circuit.push(op)?;
    }
    circuit_to_choi(simulator, &circuit)
}
