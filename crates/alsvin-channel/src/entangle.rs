//! Maximally-entangled reference-state preparation.

use alsvin_ir::{Circuit, QubitId};

use crate::error::{ChannelError, ChannelResult};

/// Build the circuit preparing the maximally entangled state
/// `|ω⟩ = Σ_i |i⟩⊗|i⟩ / √d` between two equal halves of the register.
///
/// Only 2- and 4-qubit registers are supported:
///
/// - 2 qubits: `H q0; CX q0→q1` — the Bell state `(|00⟩+|11⟩)/√2`.
/// - 4 qubits: the first half `{q0, q1}` is put into uniform
///   superposition and then perfectly correlated with the second half
///   via `CX q0→q2; CX q1→q3`.
///
/// Any other size fails with [`ChannelError::UnsupportedStateSize`].
pub fn max_entangled_state_circuit(num_qubits: usize) -> ChannelResult<Circuit> {
    let qreg: Vec<QubitId> = (0..num_qubits).map(QubitId::from).collect();
    let mut circ = Circuit::with_qubits(qreg.iter().copied());
    match num_qubits {
        2 => {
            circ.h(qreg[0])?;
            circ.cx(qreg[0], qreg[1])?;
        }
        4 => {
            // Prepare half of the qubits in a uniform superposition.
            circ.h(qreg[0])?;
            circ.h(qreg[1])?;
            // Create a perfect correlation between the two halves.
            circ.cx(qreg[0], qreg[2])?;
            circ.cx(qreg[1], qreg[3])?;
        }
        _ => {
            return Err(ChannelError::UnsupportedStateSize { num_qubits });
        }
    }
    Ok(circ)
}
