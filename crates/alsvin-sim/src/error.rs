//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced by density-matrix simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The circuit exceeds the simulator's qubit budget.
    #[error("Circuit has {qubits} qubits but the simulator supports at most {max}")]
    CircuitTooLarge {
        /// Number of qubits in the circuit.
        qubits: usize,
        /// The simulator's limit.
        max: usize,
    },

    /// A gate with no matrix realization at its arity.
    #[error("Gate '{name}' with {qubits} operands has no matrix realization")]
    UnsupportedGate {
        /// Name of the gate.
        name: String,
        /// Number of operands.
        qubits: usize,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
