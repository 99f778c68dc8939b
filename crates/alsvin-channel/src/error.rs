//! Error types for channel characterization.

use thiserror::Error;

use alsvin_ir::IrError;
use alsvin_sim::SimError;

/// Errors produced while characterizing a channel.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChannelError {
    /// Entangled-state preparation requested at an unsupported size.
    #[error("Only 2- or 4-qubit maximally entangling circuits are supported, got {num_qubits}")]
    UnsupportedStateSize {
        /// The requested register size.
        num_qubits: usize,
    },

    /// The gate's arity does not match the supplied target qubits.
    #[error("Gate acts on {expected} qubits but {got} target qubit(s) were supplied")]
    GateQubitMismatch {
        /// Qubits the gate's base family acts on.
        expected: u32,
        /// Target qubits supplied by the caller.
        got: u32,
    },

    /// The gate does not reduce to a single-generator rotation family.
    #[error("Gate '{gate}' does not expose a base rotation family")]
    NoBaseRotation {
        /// Name of the offending gate.
        gate: String,
    },

    /// Estimation depth must be at least 1.
    #[error("Estimation depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    /// The measured expectation leaves `2E−1` negative, so the
    /// fractional power in the inversion has no real value.
    #[error(
        "Fractional power of a negative base: 2E−1 = {base:.6} at depth {depth}; \
         the expectation is outside the invertible range"
    )]
    NegativeFractionalBase {
        /// The value of `2E−1`.
        base: f64,
        /// The estimation depth.
        depth: usize,
    },

    /// The recovered per-step error probability leaves the logarithm
    /// argument non-positive.
    #[error("Noise parameter out of range: Q = {q:.6} gives a non-positive logarithm argument")]
    NoiseOutOfRange {
        /// The recovered per-step error probability.
        q: f64,
    },

    /// Circuit construction failed.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] IrError),

    /// The simulator collaborator failed.
    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),
}

/// Result type for channel characterization.
pub type ChannelResult<T> = Result<T, ChannelError>;
